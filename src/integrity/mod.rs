pub mod references;
pub mod rules;

pub use references::{check_references, dangling_soft_references, exists};
pub use rules::{CascadeRule, ForeignKeyCascade, RuleTable};
