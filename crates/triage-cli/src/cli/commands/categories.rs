use crate::exit_codes;
use crate::output::humanize_label;
use triage_core::catalog::Catalog;

pub fn run() -> anyhow::Result<i32> {
    let catalog = Catalog::builtin();
    for category in catalog.iter() {
        println!("{:<20} {}", category.id(), humanize_label(category.id()));
    }
    Ok(exit_codes::SUCCESS)
}
