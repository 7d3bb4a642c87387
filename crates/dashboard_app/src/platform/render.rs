use std::fmt::Write;

use dashboard_core::{AppViewModel, FormView, NoticeLevel, PageBody, TableView};

const MENU_ACTIONS: &str = "[edit] [delete]";

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.page);
    if let Some(notice) = &view.notice {
        let tag = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        };
        let _ = writeln!(out, "[{tag}] {}", notice.text);
    }
    match &view.body {
        PageBody::Table(table) => render_table(&mut out, table),
        PageBody::Form(form) => render_form(&mut out, form),
    }
    if view.pending_submissions > 0 {
        let _ = writeln!(out, "({} submission(s) in flight)", view.pending_submissions);
    }
    out
}

fn render_table(out: &mut String, table: &TableView) {
    let cards: Vec<String> = table
        .summary
        .iter()
        .map(|card| format!("{}: {}", card.label, card.value))
        .collect();
    let _ = writeln!(out, "{}", cards.join(" | "));

    let search = if table.search.is_empty() {
        "-"
    } else {
        table.search.as_str()
    };
    let _ = writeln!(
        out,
        "Search: {search}  Filter: {} (options: {})",
        table.filter,
        table.filter_options.join(", ")
    );

    let mut header = vec!["ID"];
    header.extend(table.columns.iter().copied());
    let mut lines: Vec<Vec<&str>> = vec![header];
    for row in &table.rows {
        let mut line = vec![row.id.as_str()];
        line.extend(row.cells.iter().map(String::as_str));
        lines.push(line);
    }
    let widths = column_widths(&lines);

    for (index, line) in lines.iter().enumerate() {
        let mut text = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        if index > 0 && table.rows[index - 1].menu_open {
            text.push_str("  ");
            text.push_str(MENU_ACTIONS);
        }
        let _ = writeln!(out, "{}", text.trim_end());
    }
    if table.rows.is_empty() {
        let _ = writeln!(out, "(no matching rows)");
    }

    let _ = writeln!(
        out,
        "Page {} of {} ({} of {} rows)",
        table.page, table.total_pages, table.filtered_count, table.total_count
    );
    if let Some(form) = table.add_new {
        let _ = writeln!(out, "`add` opens {}", form.title());
    }
}

fn column_widths(lines: &[Vec<&str>]) -> Vec<usize> {
    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    (0..columns)
        .map(|column| {
            lines
                .iter()
                .filter_map(|line| line.get(column))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn render_form(out: &mut String, form: &FormView) {
    let _ = writeln!(out, "{}", form.title);
    for field in &form.fields {
        let marker = if field.required { "*" } else { " " };
        let _ = write!(out, "{marker} {:<24} {} = {:?}", field.label, field.name, field.value);
        if !field.choices.is_empty() {
            let _ = write!(out, "  [{}]", field.choices.join("|"));
        }
        let _ = writeln!(out);
        if let Some(error) = &field.error {
            let _ = writeln!(out, "    ! {error}");
        }
    }
    let status = if form.submitting {
        "Submitting..."
    } else {
        "`submit` to save, `reset` to clear"
    };
    let _ = writeln!(out, "{status}");
}

#[cfg(test)]
mod tests {
    use dashboard_core::{update, AppState, EntityKind, FormKind, ListAction, Msg, Page};

    use super::*;

    fn view_after(msgs: Vec<Msg>) -> AppViewModel {
        let mut state = AppState::new();
        for msg in msgs {
            state = update(state, msg).0;
        }
        state.view()
    }

    #[test]
    fn table_shows_cards_rows_and_page_indicator() {
        let text = render(&view_after(vec![Msg::Navigate(Page::List(EntityKind::Jobs))]));
        assert!(text.starts_with("== Jobs =="));
        assert!(text.contains("Total Jobs: 3 | Open: 2 | Closed: 1"));
        assert!(text.contains("Page 1 of 1 (3 of 3 rows)"));
        assert!(!text.contains(MENU_ACTIONS));
    }

    #[test]
    fn open_menu_is_drawn_on_its_row() {
        let text = render(&view_after(vec![Msg::List(ListAction::ToggleMenu(
            "2".to_string(),
        ))]));
        let menu_line = text
            .lines()
            .find(|line| line.ends_with(MENU_ACTIONS))
            .expect("menu line");
        assert!(menu_line.starts_with('2'));
    }

    #[test]
    fn form_errors_are_inline() {
        let text = render(&view_after(vec![
            Msg::Navigate(Page::Form(FormKind::Vendor)),
            Msg::SubmitClicked,
        ]));
        assert!(text.contains("Add New Vendor"));
        assert!(text.contains("    ! Vendor ID is required"));
    }

    #[test]
    fn empty_search_result_says_so() {
        let text = render(&view_after(vec![Msg::List(ListAction::Search(
            "zzz".to_string(),
        ))]));
        assert!(text.contains("(no matching rows)"));
        assert!(text.contains("Page 1 of 1 (0 of 2 rows)"));
    }
}
