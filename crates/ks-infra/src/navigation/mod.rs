mod stack;

pub use stack::StackNavigator;
