use crate::models::{DayLog, Entry, EntryKind, HistoryItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Journal,
    Support,
    History,
}

impl Tab {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("support") => Tab::Support,
            Some("history") => Tab::History,
            _ => Tab::Journal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Journal => "journal",
            Tab::Support => "support",
            Tab::History => "history",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Tab::Journal => "Dnevnik",
            Tab::Support => "Podrška",
            Tab::History => "Historija",
        }
    }
}

pub struct PageView<'a> {
    pub date: &'a str,
    pub long_date: &'a str,
    pub tab: Tab,
    pub streak: u32,
    pub day: &'a DayLog,
    pub messages: [&'a str; 2],
    pub workout_hint: &'a str,
    pub food_hint: &'a str,
    pub query: &'a str,
    pub history: &'a [HistoryItem],
    pub history_truncated: bool,
}

pub fn render_index(view: &PageView<'_>) -> String {
    let panel = match view.tab {
        Tab::Journal => render_journal(view),
        Tab::Support => render_support(view),
        Tab::History => render_history(view),
    };

    INDEX_HTML
        .replace("{{TABS}}", &render_tabs(view))
        .replace("{{TAB}}", view.tab.as_str())
        .replace("{{STREAK}}", &view.streak.to_string())
        .replace("{{DATE}}", view.date)
        .replace("{{PANEL}}", &panel)
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
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

fn render_tabs(view: &PageView<'_>) -> String {
    [Tab::Journal, Tab::Support, Tab::History]
        .into_iter()
        .map(|tab| {
            let class = if tab == view.tab { "tab active" } else { "tab" };
            format!(
                r#"<a class="{class}" href="/?date={date}&amp;tab={name}">{label}</a>"#,
                date = view.date,
                name = tab.as_str(),
                label = tab.label(),
            )
        })
        .collect()
}

fn render_journal(view: &PageView<'_>) -> String {
    format!(
        "{}{}",
        render_entry_card(
            view.date,
            EntryKind::Workout,
            view.day.entries(EntryKind::Workout)
        ),
        render_entry_card(view.date, EntryKind::Food, view.day.entries(EntryKind::Food)),
    )
}

fn render_entry_card(date: &str, kind: EntryKind, entries: &[Entry]) -> String {
    let (title, path, placeholder, empty) = match kind {
        EntryKind::Workout => (
            "Trening",
            "/workouts",
            "npr. snaga 45 min, kardio 30 min...",
            "Nema unosa. Ajmo jakoo — ubaci bar minimum.",
        ),
        EntryKind::Food => (
            "Prehrana",
            "/foods",
            "npr. piletina + riža, salata...",
            "Nema unosa hrane. Upis je info, ne suđenje.",
        ),
    };

    let rows = if entries.is_empty() {
        format!(r#"<p class="hint">{empty}</p>"#)
    } else {
        entries
            .iter()
            .map(|entry| {
                format!(
                    r#"<div class="row">
          <div><strong>{text}</strong><div class="meta">{time}</div></div>
          <form method="post" action="{path}/delete">
            <input type="hidden" name="date" value="{date}" />
            <input type="hidden" name="id" value="{id}" />
            <button type="submit" class="ghost" aria-label="Obriši">🗑</button>
          </form>
        </div>"#,
                    text = escape_html(&entry.text),
                    time = escape_html(&entry.time),
                    id = escape_html(&entry.id),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<section class="card">
      <h2>{title}</h2>
      <form class="add" method="post" action="{path}">
        <input type="hidden" name="date" value="{date}" />
        <input type="text" name="text" placeholder="{placeholder}" autocomplete="off" />
        <button type="submit">Dodaj</button>
      </form>
      <div class="list">
        {rows}
      </div>
    </section>"#
    )
}

fn render_support(view: &PageView<'_>) -> String {
    let messages: String = view
        .messages
        .iter()
        .map(|message| format!(r#"<div class="row">{}</div>"#, escape_html(message)))
        .collect();

    format!(
        r#"<section class="card">
      <h2>Podrška za danas</h2>
      <div class="list">{messages}</div>
      <p class="hint">{workout}</p>
      <p class="hint">{food}</p>
    </section>"#,
        workout = escape_html(view.workout_hint),
        food = escape_html(view.food_hint),
    )
}

fn render_history(view: &PageView<'_>) -> String {
    let rows = if view.history.is_empty() {
        r#"<p class="hint">Nema unosa.</p>"#.to_string()
    } else {
        view.history
            .iter()
            .map(|item| {
                let kind = match item.kind {
                    EntryKind::Workout => "Trening",
                    EntryKind::Food => "Hrana",
                };
                format!(
                    r#"<div class="row"><div><div class="meta">{date} · {time} · {kind}</div><strong>{text}</strong></div></div>"#,
                    date = escape_html(&item.date),
                    time = escape_html(&item.time),
                    text = escape_html(&item.text),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let truncated = if view.history_truncated {
        format!(
            r#"<p class="hint">Prikazujem prvih {} — suzi pretragu.</p>"#,
            view.history.len()
        )
    } else {
        String::new()
    };

    format!(
        r#"<section class="card">
      <div class="toolbar">
        <form class="add" method="get" action="/">
          <input type="hidden" name="date" value="{date}" />
          <input type="hidden" name="tab" value="history" />
          <input type="search" name="q" value="{query}" placeholder="npr. čučanj, ručak..." />
          <button type="submit">Traži</button>
        </form>
        <form method="post" action="/reset" onsubmit="return confirm('Sigurno želiš obrisati SVE podatke?');">
          <input type="hidden" name="confirm" value="yes" />
          <button type="submit" class="danger">Obriši sve</button>
        </form>
      </div>
      <p class="hint">{long_date}</p>
      <div class="list">
        {rows}
      </div>
      {truncated}
    </section>"#,
        date = view.date,
        query = escape_html(view.query),
        long_date = escape_html(view.long_date),
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="bs">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fitness Journal</title>
  <style>
    :root {
      --bg: #0b0b0c;
      --ink: #f5f5f5;
      --muted: rgba(255, 255, 255, 0.72);
      --line: rgba(255, 255, 255, 0.16);
      --card: rgba(255, 255, 255, 0.04);
      --accent: #ff6b4a;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: system-ui, sans-serif;
      padding: 16px;
    }

    .app {
      max-width: 860px;
      margin: 0 auto;
      display: grid;
      gap: 14px;
    }

    h1 {
      margin: 0;
    }

    h2 {
      margin: 0 0 8px;
      font-size: 1.1rem;
    }

    .subtitle,
    .hint,
    .meta {
      color: var(--muted);
    }

    .meta {
      font-size: 0.75rem;
    }

    .bar,
    .toolbar,
    .tabs,
    .add {
      display: flex;
      gap: 8px;
      flex-wrap: wrap;
      align-items: end;
    }

    .card {
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 14px;
      background: var(--card);
    }

    .list {
      display: grid;
      gap: 8px;
      margin-top: 10px;
    }

    .row {
      display: flex;
      justify-content: space-between;
      gap: 10px;
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 10px 12px;
      background: rgba(255, 255, 255, 0.02);
    }

    input {
      flex: 1;
      min-width: 180px;
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 10px 12px;
      background: rgba(255, 255, 255, 0.06);
      color: var(--ink);
    }

    button,
    .tab {
      border: 1px solid rgba(255, 255, 255, 0.2);
      border-radius: 14px;
      padding: 10px 12px;
      background: rgba(255, 255, 255, 0.1);
      color: var(--ink);
      font-weight: 800;
      text-decoration: none;
      cursor: pointer;
    }

    .tab.active {
      background: rgba(255, 255, 255, 0.18);
    }

    .ghost {
      background: transparent;
    }

    .danger {
      border-color: var(--accent);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Fitness Journal</h1>
      <p class="subtitle">Ajmo jakoo 🔥</p>
    </header>

    <div class="bar">
      <form method="get" action="/">
        <input type="hidden" name="tab" value="{{TAB}}" />
        <input type="date" name="date" value="{{DATE}}" onchange="this.form.submit()" />
      </form>
      <div class="card">🔥 Streak: <b id="streak">{{STREAK}}</b></div>
    </div>

    <nav class="tabs">{{TABS}}</nav>

    {{PANEL}}
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn view<'a>(day: &'a DayLog, history: &'a [HistoryItem], tab: Tab) -> PageView<'a> {
        PageView {
            date: "2024-01-02",
            long_date: "Tuesday, January 2, 2024",
            tab,
            streak: 4,
            day,
            messages: ["first", "second"],
            workout_hint: "move",
            food_hint: "eat",
            query: "",
            history,
            history_truncated: false,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html(r#"<b>"x" & 'y'</b>"#), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }

    #[test]
    fn tab_parse_defaults_to_journal() {
        assert_eq!(Tab::parse(None), Tab::Journal);
        assert_eq!(Tab::parse(Some("nonsense")), Tab::Journal);
        assert_eq!(Tab::parse(Some("history")), Tab::History);
    }

    #[test]
    fn journal_tab_renders_escaped_entries() {
        let day = DayLog {
            workouts: vec![Entry {
                id: "w1".into(),
                time: "07:30".into(),
                text: "<script>".into(),
            }],
            foods: Vec::new(),
        };
        let html = render_index(&view(&day, &[], Tab::Journal));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("07:30"));
        assert!(html.contains(r#"value="w1""#));
        assert!(html.contains("Nema unosa hrane"));
        assert!(html.contains(r#"<b id="streak">4</b>"#));
    }

    #[test]
    fn support_tab_shows_messages_and_hints() {
        let day = DayLog::default();
        let html = render_index(&view(&day, &[], Tab::Support));
        for text in ["first", "second", "move", "eat"] {
            assert!(html.contains(text));
        }
    }

    #[test]
    fn history_tab_reports_truncation() {
        let day = DayLog::default();
        let items = vec![HistoryItem {
            kind: EntryKind::Food,
            date: "2024-01-01".into(),
            time: "12:00".into(),
            text: "soup".into(),
            id: "f".into(),
        }];
        let mut page = view(&day, &items, Tab::History);
        page.history_truncated = true;
        let html = render_index(&page);
        assert!(html.contains("2024-01-01 · 12:00 · Hrana"));
        assert!(html.contains("Prikazujem prvih 1"));
        assert!(html.contains("Tuesday, January 2, 2024"));
    }
}
