// src/view/text.rs
//
// Plain-text rendering of a tab, line for line what the GUI shows.

use crate::config::state::UiState;

use super::TabView;

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

pub fn render(view: &TabView, state: &UiState) -> String {
    let mut out = s!();
    match view {
        TabView::Loading(msg) | TabView::Players(msg) => line(&mut out, msg),
        TabView::Standings(rows) => {
            for r in rows {
                line(&mut out, &r.headline());
                line(&mut out, &format!("  Total PRA: {}", r.total_pra));
                if let Some(behind) = &r.pra_behind {
                    line(&mut out, &format!("  PRA Behind: {behind}"));
                }
            }
        }
        TabView::Teams(rows) => {
            for (i, r) in rows.iter().enumerate() {
                let marker = if state.is_expanded(i) { '-' } else { '+' };
                line(&mut out, &format!("{marker} {}", r.headline()));
                line(&mut out, &format!("  {}", r.summary()));
                if state.is_expanded(i) {
                    for (label, value) in &r.details {
                        line(&mut out, &format!("    {label}: {value}"));
                    }
                }
            }
        }
        TabView::Games(rows) => {
            for r in rows {
                line(&mut out, &r.headline());
                line(&mut out, &format!("  {}", r.venue_line()));
                line(&mut out, &format!("  {}", r.broadcast_line()));
            }
        }
    }
    out
}
