use depletion::app::run;
fn main() {
    run().unwrap();
}
