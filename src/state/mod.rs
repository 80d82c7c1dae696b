pub mod gesture;

pub use gesture::GestureState;
