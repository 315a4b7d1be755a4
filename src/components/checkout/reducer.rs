use strum_macros::{Display, EnumIter};

use crate::environment::types::{Car, OrderDraft};
use crate::Action;

/// What the guest checkout view owns: the catalogue it lists and the
/// draft the visitor is typing into. Discarded when the view goes
/// away; nothing in here is persisted.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct CheckoutState {
    pub cars: Vec<Car>,
    pub draft: OrderDraft,
}

/// The seven free-text fields of the guest checkout form.
#[derive(Display, EnumIter, Debug, Clone, Copy, Eq, PartialEq)]
pub enum CheckoutField {
    CardNumber,
    CardType,
    ExpirationDate,
    Csv,
    CardHolder,
    ShippingAddress,
    BillingAddress,
}

pub fn reduce(state: CheckoutState, action: &Action) -> CheckoutState {
    log::trace!("{action:?}");
    match action {
        Action::LoadedCars(cars) => CheckoutState {
            cars: cars.clone(),
            ..state
        },
        Action::EditField(field, value) => {
            let mut state = state;
            let slot = match field {
                CheckoutField::CardNumber => &mut state.draft.card_number,
                CheckoutField::CardType => &mut state.draft.card_type,
                CheckoutField::ExpirationDate => &mut state.draft.expiration_date,
                CheckoutField::Csv => &mut state.draft.csv,
                CheckoutField::CardHolder => &mut state.draft.card_holder,
                CheckoutField::ShippingAddress => &mut state.draft.shipping_address,
                CheckoutField::BillingAddress => &mut state.draft.billing_address,
            };
            *slot = value.clone();
            state
        }
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn car(id: i64, name: &str) -> Car {
        Car {
            id,
            name: name.to_string(),
            model: "Model S".to_string(),
            year: 2019,
            color: "red".to_string(),
            price: 79999.0,
        }
    }

    #[test]
    fn loaded_cars_replaces_the_listing() {
        let state = reduce(
            CheckoutState::default(),
            &Action::LoadedCars(vec![car(1, "Tesla"), car(2, "Audi")]),
        );
        assert_eq!(state.cars.len(), 2);

        let state = reduce(state, &Action::LoadedCars(vec![car(3, "Honda")]));
        assert_eq!(state.cars.len(), 1);
        assert_eq!(state.cars[0].name, "Honda");
    }

    #[test]
    fn edit_field_overwrites_only_that_field() {
        let state = reduce(
            CheckoutState::default(),
            &Action::EditField(CheckoutField::CardHolder, "Cody Pug".to_string()),
        );
        let state = reduce(
            state,
            &Action::EditField(CheckoutField::CardNumber, "4242".to_string()),
        );
        assert_eq!(state.draft.card_holder, "Cody Pug");
        assert_eq!(state.draft.card_number, "4242");
        assert_eq!(state.draft.billing_address, "");
    }

    #[test]
    fn every_field_is_editable() {
        let mut state = CheckoutState::default();
        for field in CheckoutField::iter() {
            state = reduce(state, &Action::EditField(field, field.to_string()));
        }
        assert_eq!(state.draft.card_number, "CardNumber");
        assert_eq!(state.draft.card_type, "CardType");
        assert_eq!(state.draft.expiration_date, "ExpirationDate");
        assert_eq!(state.draft.csv, "Csv");
        assert_eq!(state.draft.card_holder, "CardHolder");
        assert_eq!(state.draft.shipping_address, "ShippingAddress");
        assert_eq!(state.draft.billing_address, "BillingAddress");
    }

    #[test]
    fn session_actions_leave_the_draft_alone() {
        let state = reduce(
            CheckoutState::default(),
            &Action::EditField(CheckoutField::Csv, "123".to_string()),
        );
        let unchanged = reduce(state.clone(), &Action::ClearUser);
        assert_eq!(unchanged, state);
    }
}
