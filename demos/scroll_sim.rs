// Example: simulate a host event loop driving the engine.
//
// The host owns the scroll offset and clamps it before building the next
// snapshot; the engine is re-queried from scratch on every event.
use windowed_list::ViewportState;

fn main() {
    let count = 10_000;
    let mut state = ViewportState::new(count, 32.0, 480.0).with_overscan(1);

    let mut offset = 0.0_f64;
    for wheel_delta in [120.0, 120.0, 4000.0, -300.0, 1_000_000.0] {
        offset = state
            .clamp_scroll_offset(offset + wheel_delta)
            .expect("extents are valid");
        state = state.with_scroll_offset(offset);

        let window = state.compute_window().expect("extents are valid");
        println!(
            "offset={offset:>9.1}  window=[{}, {})  len={}",
            window.start_index,
            window.end_index,
            window.len()
        );
    }

    // A resize is just another snapshot.
    state = state.with_viewport_extent(960.0);
    println!("after resize: {:?}", state.compute_window().unwrap());
}
