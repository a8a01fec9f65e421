pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{test_setup_with_tables, TestBuilder, TestContext, TestError};
}

/// Builds a [`TestContext`] with the given entity tables created in order.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::Users, entity::prelude::Shelters)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
