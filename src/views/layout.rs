use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::utils;

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
        script {
            (PreEscaped(r#"window.MathJax = {tex: {inlineMath: [['$', '$'], ['\\(', '\\)']], displayMath: [['$$', '$$'], ['\\[', '\\]']]}, svg: {fontCache: 'global'}};"#))
        }
        script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js" {}
        script src="/static/viewer.js" defer {}
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."brand" {
                        a href="/" {
                            strong { "Mathviz" }
                        }
                    }
                }
                ul {
                    li."version" { (utils::VERSION) }
                    li {
                        button type="button" id="panel-open" onclick="openPanel()" {
                            "\u{2630} Options"
                        }
                    }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())

            title { (format!("{title} - Mathviz")) }
        }

        body {
            (header())
            (main(body))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Mathviz" }
        (body)
    }
}
