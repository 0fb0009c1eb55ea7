fn main() {
    umake::driver::main()
}
