//! Partial updates.
//!
//! Every entity has a matching `*Patch` whose fields are all optional.
//! Applying a patch overwrites only the fields that are `Some`; everything
//! else on the target is retained.
//!
//! Optional attributes (`floor`, `image`, ...) can be set through a patch but
//! not cleared.

use super::types::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Merge of a partial record into an existing one
pub trait Patch<T>: Clone {
    fn apply(&self, target: &mut T);
}

macro_rules! define_patch {
    (
        $(#[$meta:meta])*
        $patch:ident for $target:ty {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $mode:ident ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $patch {
            $( $(#[$fmeta])* pub $field: Option<$ty>, )*
        }

        impl Patch<$target> for $patch {
            fn apply(&self, target: &mut $target) {
                $( define_patch!(@assign $mode, self.$field, target.$field); )*
            }
        }
    };
    (@assign set, $src:expr, $dst:expr) => {
        if let Some(value) = &$src {
            $dst = value.clone();
        }
    };
    (@assign opt, $src:expr, $dst:expr) => {
        if let Some(value) = &$src {
            $dst = Some(value.clone());
        }
    };
}

define_patch! {
    PropertyPatch for Property {
        name: String => set,
        address: String => set,
        #[serde(rename = "type")]
        property_type: PropertyType => set,
        units: u32 => opt,
        image: String => opt,
    }
}

define_patch! {
    UnitPatch for Unit {
        property_id: String => set,
        unit_number: String => set,
        floor: i32 => opt,
        bedrooms: u32 => opt,
        bathrooms: u32 => opt,
        square_feet: u32 => opt,
        status: UnitStatus => set,
        rent_amount: f64 => set,
    }
}

define_patch! {
    TenantPatch for Tenant {
        name: String => set,
        email: String => set,
        phone: String => set,
        unit_id: String => set,
        property_id: String => set,
        lease_start: NaiveDate => set,
        lease_end: NaiveDate => set,
    }
}

define_patch! {
    /// Contract merge. Reference ids are not re-validated on update.
    ContractPatch for Contract {
        tenant_id: String => set,
        property_id: String => set,
        unit_id: String => set,
        start_date: NaiveDate => set,
        end_date: NaiveDate => set,
        rent_amount: f64 => set,
        status: ContractStatus => set,
    }
}

define_patch! {
    MaintenanceRequestPatch for MaintenanceRequest {
        property_id: String => set,
        unit_id: String => opt,
        tenant_id: String => opt,
        title: String => set,
        description: String => set,
        status: MaintenanceStatus => set,
        priority: Priority => set,
        date_created: NaiveDate => set,
        date_updated: NaiveDate => set,
    }
}

define_patch! {
    AnnouncementPatch for Announcement {
        title: String => set,
        content: String => set,
        date_posted: NaiveDate => set,
        properties: Vec<String> => set,
    }
}

impl UnitPatch {
    pub fn status(status: UnitStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl ContractPatch {
    pub fn status(status: ContractStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}
