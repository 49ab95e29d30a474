use maud::{html, Markup, PreEscaped};

use crate::dataset::{FilterSelection, Record, SampleCount};
use crate::names;

/// The full viewer body: side options panel plus the display region. The
/// display region triggers the first filter cycle itself on page load.
pub fn viewer(labels: &[String], selection: &FilterSelection) -> Markup {
    html! {
        div."viewer-layout" {
            (options_panel(labels, selection))
            div id="display" {
                div id=(names::RESULTS_ID)
                    hx-get=(names::FILTER_URL)
                    hx-trigger="load"
                    hx-include=(format!("#{} select", names::OPTIONS_PANEL_ID))
                    hx-swap="innerHTML" {
                    (not_loaded())
                }
            }
        }
    }
}

pub fn options_panel(labels: &[String], selection: &FilterSelection) -> Markup {
    html! {
        aside id=(names::OPTIONS_PANEL_ID) {
            div."panel-header" {
                h2 { "Options" }
                button type="button" id="panel-close" onclick="closePanel()" { "\u{00D7}" }
            }
            label for=(names::COUNT_SELECT_ID) { "Questions to show" }
            (count_select(selection.sample_count))
            label for=(names::CATEGORY_SELECT_ID) { "Category" }
            (category_select(labels, &selection.category, false))
            button type="button"
                   hx-get=(names::FILTER_URL)
                   hx-include=(format!("#{} select", names::OPTIONS_PANEL_ID))
                   hx-target=(format!("#{}", names::RESULTS_ID))
                   hx-swap="innerHTML" {
                "View"
            }
        }
    }
}

/// The category selector. With `oob` set the fragment swaps out-of-band,
/// which is how each filter cycle repopulates the option list while the
/// results land in the display region.
pub fn category_select(labels: &[String], selected: &str, oob: bool) -> Markup {
    html! {
        select id=(names::CATEGORY_SELECT_ID)
               name="category"
               hx-swap-oob=[oob.then_some("outerHTML")]
               hx-get=(names::FILTER_URL)
               hx-include=(format!("#{} select", names::OPTIONS_PANEL_ID))
               hx-target=(format!("#{}", names::RESULTS_ID))
               hx-swap="innerHTML" {
            @for label in labels {
                option value=(label) selected[label.as_str() == selected] { (label) }
            }
        }
    }
}

pub fn count_select(selected: SampleCount) -> Markup {
    let selected = selected.to_string();
    html! {
        select id=(names::COUNT_SELECT_ID)
               name="count"
               hx-get=(names::FILTER_URL)
               hx-include=(format!("#{} select", names::OPTIONS_PANEL_ID))
               hx-target=(format!("#{}", names::RESULTS_ID))
               hx-swap="innerHTML" {
            @for option in names::SAMPLE_COUNT_OPTIONS {
                option value=(option) selected[*option == selected] { (option) }
            }
        }
    }
}

/// Renders the result set into a single container, one block per record, or
/// the fixed no-results message when the set is empty.
pub fn results(records: &[&Record]) -> Markup {
    if records.is_empty() {
        return no_results();
    }
    html! {
        div."question-list" {
            @for record in records {
                (question_block(record))
            }
        }
    }
}

pub fn question_block(record: &Record) -> Markup {
    html! {
        article."question-block" {
            p."question-text" {
                strong {
                    a href=(names::question_url(&record.id)) { (record.id) }
                    ": "
                }
                // Question text carries TeX delimiters and exporter-inserted
                // <img> tags; it must reach MathJax unescaped.
                (PreEscaped(record.question.as_str()))
            }

            @if !record.question.contains("<img") {
                @for src in &record.image {
                    img."question-img" src=(src);
                }
            }

            @if !record.choices.is_empty() {
                ol."choices" {
                    @for choice in &record.choices {
                        li { (PreEscaped(choice.as_str())) }
                    }
                }
            }

            @if let Some(hint) = &record.hint {
                details."hint" {
                    summary { "Hint" }
                    p { (PreEscaped(hint.as_str())) }
                }
            }

            @if let Some(answer) = &record.answer {
                p."answer" {
                    strong { "Answer: " }
                    (PreEscaped(answer.as_str()))
                }
            }

            @if let Some(analysis) = &record.analysis {
                section."analysis" {
                    h4 { "Analysis" }
                    p { (PreEscaped(analysis.as_str())) }
                    @if !analysis.contains("<img") {
                        @for src in &record.analysis_image {
                            img."question-img" src=(src);
                        }
                    }
                }
            }

            @if let Some(category) = &record.category {
                small."category-caption" { "Category: " (category) }
            }
        }
        hr;
    }
}

pub fn no_results() -> Markup {
    html! {
        p."no-results" { "No matching questions." }
    }
}

/// Placeholder shown before the first load has completed.
pub fn not_loaded() -> Markup {
    html! {
        p."not-loaded" { "Loading questions\u{2026}" }
    }
}

pub fn load_error() -> Markup {
    html! {
        p."load-error" {
            "Could not load the question dataset. Check the dataset file and try again."
        }
    }
}
