use crate::category::{Category, Domain, Group};
use std::fmt;

/// Identifies one kind of command. Two protocols are equal only when every
/// field matches, so a protocol is usually declared once as a constant and
/// shared by the definitions and executables that refer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Protocol {
    name: &'static str,
    category: Category,
    group: Group,
    domain: Domain,
}

impl Protocol {
    pub const AFK: Protocol =
        Protocol::new("AFK", Category::Normal, Group::Chat, Domain::Application);
    pub const HELP: Protocol =
        Protocol::new("HELP", Category::Normal, Group::System, Domain::Application);
    pub const QUIT: Protocol =
        Protocol::new("QUIT", Category::Normal, Group::System, Domain::Application);

    /// Protocols understood out of the box.
    pub const DEFAULTS: [Protocol; 3] = [Protocol::AFK, Protocol::HELP, Protocol::QUIT];

    pub const fn new(name: &'static str, category: Category, group: Group, domain: Domain) -> Self {
        Self {
            name,
            category,
            group,
            domain,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
