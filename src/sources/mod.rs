
pub use self::in_memory_test::{InMemoryMBeanBuilder, InMemoryMBeanSource, RecordedCall};
