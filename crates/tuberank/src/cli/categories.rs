//! Category listing command handler.

use std::io::Write;
use tuberank::VideoCategory;

/// Write one `key<TAB>label` line per category, in declaration order.
pub fn handle_categories_command(out: &mut impl Write) -> std::io::Result<()> {
    for category in VideoCategory::all() {
        writeln!(out, "{}\t{}", category.key(), category)?;
    }
    Ok(())
}
