pub mod airport;
pub mod game;

pub trait ExampleData {
    fn example_data() -> Self;
}
