use crate::reconcile::ChildPatch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub address_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region_id: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub outer_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub address_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region_id: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub outer_id: Option<String>,
}

impl AddressRecord {
    pub fn to_domain(&self, mut address: Address) -> Address {
        address.address_type = self.address_type.clone();
        address.name = self.name.clone();
        address.organization = self.organization.clone();
        address.first_name = self.first_name.clone();
        address.last_name = self.last_name.clone();
        address.line1 = self.line1.clone();
        address.line2 = self.line2.clone();
        address.city = self.city.clone();
        address.region_id = self.region_id.clone();
        address.region_name = self.region_name.clone();
        address.country_code = self.country_code.clone();
        address.country_name = self.country_name.clone();
        address.postal_code = self.postal_code.clone();
        address.phone = self.phone.clone();
        address.email = self.email.clone();
        address.outer_id = self.outer_id.clone();
        address
    }

    pub fn fill_from(mut self, address: &Address) -> Self {
        self.address_type = address.address_type.clone();
        self.name = address.name.clone();
        self.organization = address.organization.clone();
        self.first_name = address.first_name.clone();
        self.last_name = address.last_name.clone();
        self.line1 = address.line1.clone();
        self.line2 = address.line2.clone();
        self.city = address.city.clone();
        self.region_id = address.region_id.clone();
        self.region_name = address.region_name.clone();
        self.country_code = address.country_code.clone();
        self.country_name = address.country_name.clone();
        self.postal_code = address.postal_code.clone();
        self.phone = address.phone.clone();
        self.email = address.email.clone();
        self.outer_id = address.outer_id.clone();
        self
    }
}

impl ChildPatch for AddressRecord {
    fn patch(&self, target: &mut Self) {
        target.address_type = self.address_type.clone();
        target.name = self.name.clone();
        target.organization = self.organization.clone();
        target.first_name = self.first_name.clone();
        target.last_name = self.last_name.clone();
        target.line1 = self.line1.clone();
        target.line2 = self.line2.clone();
        target.city = self.city.clone();
        target.region_id = self.region_id.clone();
        target.region_name = self.region_name.clone();
        target.country_code = self.country_code.clone();
        target.country_name = self.country_name.clone();
        target.postal_code = self.postal_code.clone();
        target.phone = self.phone.clone();
        target.email = self.email.clone();
        target.outer_id = self.outer_id.clone();
    }
}
