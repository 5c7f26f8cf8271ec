//! Terminal treemap: Paint a weighted dataset as colored blocks.
//!
//! Lays a fixed dataset out over the current terminal size and fills each
//! tile with its own background color, writing the label into tiles wide
//! enough to hold it. One-shot: paints, reports the layout quality on the
//! bottom line, and exits.

use std::io::{self, Write};

use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use unicode_width::UnicodeWidthStr;

use mosaic::{Collector, Item, Rect, Tile, Treemap};

/// Disk usage of a fictional home directory, in gigabytes.
const DATASET: [(&str, f64); 9] = [
    ("video", 34.0),
    ("photos", 21.0),
    ("music", 13.0),
    ("builds", 8.0),
    ("docs", 8.0),
    ("mail", 5.0),
    ("cache", 5.0),
    ("logs", 4.0),
    ("misc", 2.0),
];

/// Backgrounds cycled across tiles.
const PALETTE: [Color; 6] = [
    Color::DarkBlue,
    Color::DarkGreen,
    Color::DarkMagenta,
    Color::DarkCyan,
    Color::DarkRed,
    Color::DarkYellow,
];

fn main() -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    // Keep the last line free for the summary.
    let rows = rows.saturating_sub(1).max(1);

    let width = f64::from(cols);
    let height = f64::from(rows);

    // Scale the dataset so its weights sum to the screen's cell area.
    let total: f64 = DATASET.iter().map(|&(_, weight)| weight).sum();
    let items: Vec<Item<&str>> = DATASET
        .iter()
        .map(|&(label, weight)| Item::new(label, weight / total * width * height))
        .collect();

    let mut sink = Collector::new();
    let mut tiles: Vec<(Tile, &str)> = Vec::new();
    Treemap::new(&items).render_within(Rect::from_size(width, height), |tile, label| {
        sink.record(tile);
        tiles.push((tile, label));
    });

    let mut stdout = io::stdout();
    queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
    for (index, (tile, label)) in tiles.iter().enumerate() {
        paint(&mut stdout, *tile, label, PALETTE[index % PALETTE.len()], cols, rows)?;
    }

    let summary = format!(
        "{} tiles over {cols}x{rows} cells, worst aspect {:.2}\n",
        tiles.len(),
        sink.worst_aspect()
    );
    queue!(stdout, ResetColor, cursor::MoveTo(0, rows), Print(summary))?;
    stdout.flush()
}

/// Fill one tile's cells, labelling it when there is room.
fn paint(
    out: &mut impl Write,
    tile: Tile,
    label: &str,
    color: Color,
    cols: u16,
    rows: u16,
) -> io::Result<()> {
    // Snap fractional edges to whole cells. Neighboring tiles share edges
    // and snap the same way, so the screen stays gap-free.
    let x0 = (tile.x0.round() as u16).min(cols);
    let y0 = (tile.y0.round() as u16).min(rows);
    let x1 = (tile.x1.round() as u16).min(cols);
    let y1 = (tile.y1.round() as u16).min(rows);
    if x1 <= x0 || y1 <= y0 {
        return Ok(());
    }

    let width = usize::from(x1 - x0);
    queue!(out, SetBackgroundColor(color), SetForegroundColor(Color::White))?;
    for y in y0..y1 {
        queue!(out, cursor::MoveTo(x0, y), Print(" ".repeat(width)))?;
    }
    if label.width() + 2 <= width {
        queue!(out, cursor::MoveTo(x0 + 1, y0), Print(label))?;
    }
    Ok(())
}
