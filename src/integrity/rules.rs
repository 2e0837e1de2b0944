use crate::core::{Contract, EntityKind, Record, Tenant, Unit};
use crate::transaction::StoreTx;
use std::collections::VecDeque;
use std::marker::PhantomData;
use tracing::debug;

/// Removes dependents of deleted parent records
pub trait CascadeRule: Send + Sync {
    /// Rule name for logging
    fn name(&self) -> &'static str;

    fn parent(&self) -> EntityKind;

    fn child(&self) -> EntityKind;

    /// Whether the rule fires in a cascade started by deleting a `root` record
    fn applies_from(&self, _root: EntityKind) -> bool {
        true
    }

    /// Deletes child rows pointing at any of `parent_ids`; returns their ids
    fn cascade(&self, parent_ids: &[String], tx: &mut StoreTx) -> Vec<String>;
}

/// Cascade over a single string foreign key on the child record
pub struct ForeignKeyCascade<C: Record> {
    name: &'static str,
    parent: EntityKind,
    key: fn(&C) -> &str,
    roots: Option<&'static [EntityKind]>,
    _child: PhantomData<fn() -> C>,
}

impl<C: Record> ForeignKeyCascade<C> {
    pub fn new(name: &'static str, parent: EntityKind, key: fn(&C) -> &str) -> Self {
        Self {
            name,
            parent,
            key,
            roots: None,
            _child: PhantomData,
        }
    }

    /// Restricts the rule to cascades started from one of `roots`
    pub fn only_from(mut self, roots: &'static [EntityKind]) -> Self {
        self.roots = Some(roots);
        self
    }
}

impl<C: Record> CascadeRule for ForeignKeyCascade<C> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn parent(&self) -> EntityKind {
        self.parent
    }

    fn child(&self) -> EntityKind {
        C::KIND
    }

    fn applies_from(&self, root: EntityKind) -> bool {
        self.roots.is_none_or(|roots| roots.contains(&root))
    }

    fn cascade(&self, parent_ids: &[String], tx: &mut StoreTx) -> Vec<String> {
        let key = self.key;
        tx.remove_where::<C, _>(|child| parent_ids.iter().any(|p| p.as_str() == key(child)))
    }
}

/// Table of cascade rules, consulted on every delete.
///
/// Rules for a parent run in registration order; the rows they remove are
/// queued as parents in turn, so the cascade proceeds breadth-first down the
/// ownership hierarchy. A rule restricted with
/// [`ForeignKeyCascade::only_from`] is skipped when the delete started from
/// any other kind.
pub struct RuleTable {
    rules: Vec<Box<dyn CascadeRule>>,
}

impl RuleTable {
    /// A table with no rules: deletes never cascade
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Property -> Unit -> {Tenant, Contract}, Tenant -> Contract.
    ///
    /// Tenant -> Contract fires for property and tenant deletes only; a unit
    /// delete removes contracts by unit id alone.
    pub fn with_default_rules() -> Self {
        let mut table = Self::empty();
        table.register(Box::new(ForeignKeyCascade::<Unit>::new(
            "units_of_property",
            EntityKind::Property,
            |u| u.property_id.as_str(),
        )));
        table.register(Box::new(ForeignKeyCascade::<Tenant>::new(
            "tenants_of_unit",
            EntityKind::Unit,
            |t| t.unit_id.as_str(),
        )));
        table.register(Box::new(ForeignKeyCascade::<Contract>::new(
            "contracts_of_unit",
            EntityKind::Unit,
            |c| c.unit_id.as_str(),
        )));
        table.register(Box::new(ForeignKeyCascade::<Contract>::new(
            "contracts_of_tenant",
            EntityKind::Tenant,
            |c| c.tenant_id.as_str(),
        )
        .only_from(&[EntityKind::Property, EntityKind::Tenant])));
        table
    }

    pub fn register(&mut self, rule: Box<dyn CascadeRule>) {
        self.rules.push(rule);
    }

    pub fn rules_for(&self, parent: EntityKind) -> impl Iterator<Item = &dyn CascadeRule> {
        self.rules
            .iter()
            .filter(move |r| r.parent() == parent)
            .map(|r| r.as_ref())
    }

    pub fn list_rules(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs every rule reachable from the removed `ids` of kind `root`
    pub fn cascade(&self, root: EntityKind, ids: Vec<String>, tx: &mut StoreTx) {
        let mut queue = VecDeque::new();
        if !ids.is_empty() {
            queue.push_back((root, ids));
        }

        while let Some((parent, parent_ids)) = queue.pop_front() {
            for rule in self.rules_for(parent).filter(|r| r.applies_from(root)) {
                let removed = rule.cascade(&parent_ids, tx);
                if removed.is_empty() {
                    continue;
                }
                debug!(rule = rule.name(), removed = removed.len(), "cascade");
                queue.push_back((rule.child(), removed));
            }
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_registered_in_order() {
        let table = RuleTable::with_default_rules();
        assert_eq!(
            table.list_rules(),
            vec![
                "units_of_property",
                "tenants_of_unit",
                "contracts_of_unit",
                "contracts_of_tenant"
            ]
        );
        assert_eq!(table.rules_for(EntityKind::Unit).count(), 2);
        assert_eq!(table.rules_for(EntityKind::Announcement).count(), 0);
    }

    #[test]
    fn test_rule_reports_parent_and_child() {
        let rule = ForeignKeyCascade::<Tenant>::new("t", EntityKind::Unit, |t| t.unit_id.as_str());
        assert_eq!(rule.parent(), EntityKind::Unit);
        assert_eq!(rule.child(), EntityKind::Tenant);
        assert!(rule.applies_from(EntityKind::Property));
    }

    #[test]
    fn test_tenant_contract_rule_skips_unit_roots() {
        let table = RuleTable::with_default_rules();
        let rule = table
            .rules_for(EntityKind::Tenant)
            .next()
            .expect("tenant rule registered");

        assert_eq!(rule.name(), "contracts_of_tenant");
        assert!(rule.applies_from(EntityKind::Tenant));
        assert!(rule.applies_from(EntityKind::Property));
        assert!(!rule.applies_from(EntityKind::Unit));
    }
}
