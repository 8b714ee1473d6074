// src/gui/actions/export.rs
//
// Write the currently matching records (all records when no filter is
// active) as delimited text. The export sees derived fields, not raw
// feed cells: normalized price, decoded size tags, slugged facets.

use std::fs;

use crate::{csv, filter, gui::app::App};

const EXPORT_HEADERS: &[&str] = &["id", "name", "price", "sizes", "category", "style", "sold"];

pub fn export(app: &mut App) {
    app.state.options.export.set_path(&app.out_path_text);
    let opts = &app.state.options.export;
    let sel = &app.state.gui.selection;

    let rows: Vec<Vec<String>> = app
        .catalog
        .records
        .iter()
        .filter(|r| filter::matches(r, sel))
        .map(|r| {
            vec![
                r.id.clone(),
                r.name.clone(),
                r.price_display(),
                join_set(&r.size_tags),
                join_set(&r.category_tags),
                join_set(&r.style_tags),
                if r.sold { s!("yes") } else { s!() },
            ]
        })
        .collect();

    let headers = opts
        .include_headers
        .then(|| EXPORT_HEADERS.iter().map(|h| s!(*h)).collect());

    let text = csv::rows_to_string(&rows, &headers, opts.format);
    let path = opts.out_path();

    let res = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(fs::create_dir_all)
        .unwrap_or(Ok(()))
        .and_then(|_| fs::write(&path, text));

    match res {
        Ok(()) => {
            logf!("Export: {} rows → {}", rows.len(), path.display());
            app.status(format!("Exported {} rows → {}", rows.len(), path.display()));
        }
        Err(e) => {
            loge!("Export: failed: {}", e);
            app.status(format!("Export failed: {e}"));
        }
    }
}

fn join_set(set: &std::collections::BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}
