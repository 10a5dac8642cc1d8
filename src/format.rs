use std::fmt;

use crate::constants::files::{IMAGE_DIR, LABEL_DIR};

/// Dataset partition; its name doubles as directory and manifest prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Train,
    Val,
    Test,
}

impl Partition {
    pub fn as_str(self) -> &'static str {
        match self {
            Partition::Train => "Train",
            Partition::Val => "Val",
            Partition::Test => "Test",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render one manifest line: `<P>/image/<id> <P>/label/<id>`.
pub fn split_line(image_name: &str, partition: Partition) -> String {
    format!("{partition}/{IMAGE_DIR}/{image_name} {partition}/{LABEL_DIR}/{image_name}")
}

/// Format every identifier of `partition` in order.
pub fn split_lines<S: AsRef<str>>(image_names: &[S], partition: Partition) -> Vec<String> {
    image_names
        .iter()
        .map(|name| split_line(name.as_ref(), partition))
        .collect()
}
