use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use kinetic::replay::SessionSummary;

pub fn print_session_report(name: &str, s: &SessionSummary) {
    println!("\nSession: {}", name);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let exit = match s.exit_frame {
        Some(i) => format!("frame {}", i),
        None => "-".to_string(),
    };

    let rows: Vec<(&str, String, Option<Color>)> = vec![
        ("Frames", s.frames.to_string(), None),
        ("Idle frames", s.idle_frames.to_string(), None),
        ("Active frames", s.active_frames.to_string(), None),
        ("Scroll frames", s.scroll_frames.to_string(), None),
        ("Moves", s.moves.to_string(), None),
        ("Left clicks", s.left_clicks.to_string(), Some(Color::Cyan)),
        ("Right clicks", s.right_clicks.to_string(), Some(Color::Cyan)),
        ("Scroll ticks", s.scroll_ticks.to_string(), Some(Color::Green)),
        ("Net scroll", s.net_scroll.to_string(), Some(Color::Green)),
        ("Fail-safe", exit, Some(Color::Red)),
        ("Average FPS", format!("{:.1}", s.average_fps), None),
    ];

    for (label, value, color) in rows {
        let mut cell = Cell::new(value);
        if let Some(c) = color {
            cell = cell.fg(c);
        }
        table.add_row(vec![Cell::new(label), cell]);
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("{}", table);
}
