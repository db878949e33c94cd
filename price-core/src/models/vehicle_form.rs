/// Identifies one of the seven form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    KmsDriven,
    Fuel,
    SellerType,
    Transmission,
    Owner,
    BrandName,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 7] = [
        Field::Year,
        Field::KmsDriven,
        Field::Fuel,
        Field::SellerType,
        Field::Transmission,
        Field::Owner,
        Field::BrandName,
    ];
}

/// Raw text of every form field, exactly as entered.
///
/// Values are captured without coercion; the presentation layer is
/// responsible for restricting the three option fields to their
/// enumerated values. A fresh form has every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleForm {
    pub year: String,
    pub kms_driven: String,
    pub fuel: String,
    pub seller_type: String,
    pub transmission: String,
    pub owner: String,
    pub brand_name: String,
}

impl VehicleForm {
    /// Overwrites a single field, leaving all others unchanged.
    pub fn set(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) {
        let value = value.into();
        match field {
            Field::Year => self.year = value,
            Field::KmsDriven => self.kms_driven = value,
            Field::Fuel => self.fuel = value,
            Field::SellerType => self.seller_type = value,
            Field::Transmission => self.transmission = value,
            Field::Owner => self.owner = value,
            Field::BrandName => self.brand_name = value,
        }
    }

    pub fn get(
        &self,
        field: Field,
    ) -> &str {
        match field {
            Field::Year => &self.year,
            Field::KmsDriven => &self.kms_driven,
            Field::Fuel => &self.fuel,
            Field::SellerType => &self.seller_type,
            Field::Transmission => &self.transmission,
            Field::Owner => &self.owner,
            Field::BrandName => &self.brand_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fresh_form_is_empty() {
        let form = VehicleForm::default();

        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn set_overwrites_only_the_named_field() {
        let mut form = VehicleForm::default();

        form.set(Field::Year, "2015");
        form.set(Field::BrandName, "Maruti");

        assert_eq!(form.year, "2015");
        assert_eq!(form.brand_name, "Maruti");
        assert_eq!(form.kms_driven, "");
        assert_eq!(form.fuel, "");
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut form = VehicleForm::default();

        form.set(Field::Owner, "1");
        form.set(Field::Owner, "2");

        assert_eq!(form.owner, "2");
    }
}
