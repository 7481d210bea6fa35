use crate::catalog::{Category, Mood};
use crate::chart::render_chart;
use crate::logger::MAX_NOTE_CHARS;
use crate::stats::{NO_DATA_MESSAGE, NO_ENTRIES_MESSAGE};
use chrono::NaiveDate;

pub const PAGE_TITLE: &str = "Mood of the Queue";
pub const PAGE_ICON: &str = "🧪";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "ok",
            NoticeKind::Warning => "warn",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// What the main area shows below the title.
pub enum MainView {
    NoData,
    Day {
        picked: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
        counts: Vec<(Category, u64)>,
    },
}

pub fn render_page(notices: &[Notice], view: &MainView) -> String {
    INDEX_HTML
        .replace("{{TITLE}}", PAGE_TITLE)
        .replace("{{ICON}}", PAGE_ICON)
        .replace("{{FORM}}", &render_form())
        .replace("{{MAIN}}", &render_main(view))
        .replace("{{NOTICES}}", &render_notices(notices))
}

fn render_form() -> String {
    let options: String = Mood::ALL
        .iter()
        .map(|mood| format!(r#"<option value="{0}">{0}</option>"#, mood.token()))
        .collect();
    format!(
        r#"<form class="log-form" method="post" action="/log">
        <h2>Log your mood</h2>
        <label for="mood">How are you feeling?</label>
        <select id="mood" name="mood">{options}</select>
        <label for="note">Note (50 words max)</label>
        <textarea id="note" name="note" rows="4" maxlength="{MAX_NOTE_CHARS}" title="Optional: Add a short note" placeholder="Optional: Add a short note"></textarea>
        <button type="submit">Submit</button>
      </form>"#
    )
}

fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|notice| {
            format!(
                r#"<div class="toast" data-type="{}">{}</div>"#,
                notice.kind.class(),
                escape_html(&notice.message)
            )
        })
        .collect()
}

fn render_main(view: &MainView) -> String {
    match view {
        MainView::NoData => info_box(NO_DATA_MESSAGE),
        MainView::Day {
            picked,
            min,
            max,
            counts,
        } => {
            let body = if counts.is_empty() {
                info_box(NO_ENTRIES_MESSAGE)
            } else {
                format!(r#"<div class="chart-card">{}</div>"#, render_chart(counts))
            };
            format!(
                r#"<form class="picker" method="get" action="/">
        <label for="date">Pick a date</label>
        <input id="date" type="date" name="date" value="{picked}" min="{min}" max="{max}" onchange="this.form.submit()" />
        <noscript><button type="submit">Show</button></noscript>
      </form>
      <h2>Mood stats for {picked}</h2>
      {body}"#
            )
        }
    }
}

fn info_box(message: &str) -> String {
    format!(r#"<p class="info">{}</p>"#, escape_html(message))
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{{ICON}}</text></svg>" />
  <style>
    :root {
      --bg: #f6f4ef;
      --ink: #262730;
      --muted: #6b6f7b;
      --accent: #ff4b4b;
      --bar: #4c78a8;
      --card: #ffffff;
      --sidebar: #eef0f5;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Source Sans Pro", "Segoe UI", sans-serif;
      display: grid;
      grid-template-columns: 300px 1fr;
    }

    aside {
      background: var(--sidebar);
      padding: 32px 22px;
    }

    main {
      padding: 40px 48px;
      display: grid;
      gap: 20px;
      align-content: start;
      max-width: 820px;
    }

    h1 {
      margin: 0;
      font-size: 2.4rem;
    }

    h2 {
      margin: 0 0 8px;
      font-size: 1.35rem;
    }

    .log-form,
    .picker {
      display: grid;
      gap: 10px;
    }

    label {
      font-size: 0.9rem;
      color: var(--muted);
    }

    select,
    textarea,
    input[type="date"] {
      font: inherit;
      padding: 8px 10px;
      border: 1px solid rgba(38, 39, 48, 0.2);
      border-radius: 8px;
      background: white;
    }

    button {
      font: inherit;
      font-weight: 600;
      padding: 10px 16px;
      border: 1px solid var(--accent);
      border-radius: 8px;
      background: white;
      color: var(--accent);
      cursor: pointer;
    }

    button:hover {
      background: var(--accent);
      color: white;
    }

    .toasts {
      position: fixed;
      right: 20px;
      bottom: 20px;
      display: grid;
      gap: 8px;
    }

    .toast {
      background: var(--card);
      border-radius: 10px;
      padding: 12px 16px;
      box-shadow: 0 10px 28px rgba(38, 39, 48, 0.16);
      animation: fade 4s ease forwards;
    }

    .toast[data-type="ok"] {
      border-left: 4px solid #21a35a;
    }

    .toast[data-type="warn"] {
      border-left: 4px solid #f2a100;
    }

    .toast[data-type="info"] {
      border-left: 4px solid var(--bar);
    }

    .info {
      margin: 0;
      padding: 14px 16px;
      border-radius: 8px;
      background: rgba(76, 120, 168, 0.12);
      color: #1e3a5f;
    }

    .chart-card {
      background: var(--card);
      border-radius: 12px;
      padding: 12px;
    }

    .chart {
      width: 100%;
      display: block;
    }

    .chart .bar {
      fill: var(--bar);
    }

    .chart-title {
      font-size: 16px;
      font-weight: 600;
    }

    .chart-grid {
      stroke: rgba(38, 39, 48, 0.08);
    }

    .chart-axis {
      stroke: rgba(38, 39, 48, 0.4);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 12px;
    }

    .chart-axis-title {
      font-size: 13px;
    }

    @keyframes fade {
      0%,
      80% {
        opacity: 1;
      }
      100% {
        opacity: 0;
        visibility: hidden;
      }
    }

    @media (max-width: 760px) {
      body {
        grid-template-columns: 1fr;
      }
      main {
        padding: 28px 20px;
      }
    }
  </style>
</head>
<body>
  <aside>
    {{FORM}}
  </aside>
  <main>
    <h1>{{TITLE}}</h1>
    {{MAIN}}
  </main>
  <div class="toasts">{{NOTICES}}</div>
</body>
</html>
"#;
