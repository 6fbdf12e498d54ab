//! Day-by-day output.

use std::io::Write;

use serde::Serialize;

use gilded_rose_inventory::{Category, Shop};

use crate::config::OutputFormat;

#[derive(Debug, Serialize)]
struct ItemSnapshot<'a> {
    name: &'a str,
    sell_in: i32,
    quality: i32,
    category: Category,
}

#[derive(Debug, Serialize)]
struct DaySnapshot<'a> {
    day: u32,
    items: Vec<ItemSnapshot<'a>>,
}

/// Write the shop's current day.
///
/// Text output is one `name, sell_in, quality` line per item under a day
/// header, followed by a blank line. JSON output is one object per line.
pub fn render_day<W: Write>(out: &mut W, shop: &Shop, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "-------- day {} --------", shop.day())?;
            writeln!(out, "name, sellIn, quality")?;
            for item in shop.items() {
                writeln!(out, "{item}")?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            let snapshot = DaySnapshot {
                day: shop.day(),
                items: shop
                    .items()
                    .iter()
                    .map(|item| ItemSnapshot {
                        name: item.name(),
                        sell_in: item.sell_in(),
                        quality: item.quality(),
                        category: item.category(),
                    })
                    .collect(),
            };
            serde_json::to_writer(&mut *out, &snapshot)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
