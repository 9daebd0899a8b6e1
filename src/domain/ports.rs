use crate::domain::model::{OutputFormat, RescatterCategory};

pub trait ConfigProvider: Send + Sync {
    fn default_rescatter_category(&self) -> RescatterCategory;
    fn output_format(&self) -> OutputFormat;
}
