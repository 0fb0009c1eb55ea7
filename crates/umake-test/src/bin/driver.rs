//! The `umake` driver, built inside the test crate so that its integration
//! tests can launch it.

fn main() {
    umake::driver::main()
}
