use std::fs::File;

use card_view::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

const ITEMS: &str = r#"[
    { "data": { "inode": "a1", "identifier": "home", "title": "Home" } },
    { "data": { "inode": "b7", "identifier": "about", "title": "About" } },
    { "data": { "inode": "c3", "identifier": "blog", "title": "Blog" } },
    { "data": { "inode": "d9", "identifier": "contact", "title": "Contact" } },
    { "data": { "inode": "e2", "identifier": "jobs", "title": "Jobs" } }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("pick.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let mut grid: SelectionGrid<Contentlet> = SelectionGrid::new(GridConfig::new("pick"));
    grid.set_items(parse_items(ITEMS)?)?;
    grid.set_value(Some("b7,zz"));
    grid.mount();
    print_grid(&grid);

    let ids = grid.card_ids();
    grid.handle(CardEvent::check(ids[0], true));
    grid.handle(CardEvent::shift_check(ids[3], true));
    grid.handle(CardEvent::ContextMenu {
        card: ids[4],
        x: 120,
        y: 40,
    });
    grid.handle(CardEvent::Activated { card: ids[2] });

    for event in grid.drain_events() {
        match event {
            GridEvent::Selected(selected) => println!("selected -> {}", selected.value),
            GridEvent::CardClick(click) => {
                println!("clicked  -> {}", click.item.title().unwrap_or(&click.item.inode))
            }
        }
    }
    print_grid(&grid);

    grid.clear_value();
    print_grid(&grid);
    Ok(())
}

fn print_grid(grid: &SelectionGrid<Contentlet>) {
    for view in grid.views() {
        let mark = if view.checked() { "[x]" } else { "[ ]" };
        println!("{} {}", mark, view.item.title().unwrap_or_default());
    }
    println!("value: {:?}\n", grid.get_value());
}
