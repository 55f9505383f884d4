// Example: minimal usage and scroll-to helper.
use windowed_list::{Align, ViewportState};

fn main() {
    let rows: Vec<String> = (0..1_000_000).map(|i| format!("row {i}")).collect();

    let state = ViewportState::new(rows.len(), 24.0, 600.0)
        .with_scroll_offset(123_456.0)
        .with_overscan(2);

    println!("total_extent={}", state.total_extent().unwrap());
    println!("window={:?}", state.compute_window().unwrap());

    for (item, row) in state.windowed_items(&rows).unwrap() {
        println!("{:>10.1}  {row}", item.offset);
    }

    let target = state.scroll_to_index_offset(999_999, Align::End).unwrap();
    println!("scroll_to(999_999, End) => offset={target}");
}
