/// Binary entrypoint for the `genlist` executable.
///
/// Keeps the binary thin — all business logic lives in the `genlist_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    genlist_lib::run();
}
