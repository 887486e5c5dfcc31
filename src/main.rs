use tally::tasks::DemoTask;

fn main() {
    println!("{}", DemoTask::new().run_rendered());
}
