//! Walks through the basic OrderedMap operations, printing the map after
//! each step.
//!
//! Run with: cargo run --example walkthrough

use nexus_ordered_map::OrderedMap;

type Table = OrderedMap<String, i32>;

fn print(table: &Table) {
    print!("{{ ");
    for (key, value) in table {
        print!("[{key}]({value}) ");
    }
    println!("}}");
}

fn main() {
    let mut table = Table::new();

    // set values
    table.set("a".into(), 1);
    table.set("b".into(), 2);
    table.set("c".into(), 3);
    print(&table);

    // update one value in place
    table.set("c".into(), 4);
    print(&table);

    // add one key, remove another
    table.set("d".into(), 5);
    table.erase("c");
    print(&table);

    // erase through a handle
    if let Some(d) = table.find("d") {
        match table.erase_handle(d) {
            Ok(_) => {}
            Err(err) => println!("erase failed: {err}"),
        }
    }
    print(&table);

    // reorder; key/value pairs stay together
    table.sort_by(|(k1, _), (k2, _)| k2.cmp(k1));
    print(&table);
    table.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
    print(&table);
}
