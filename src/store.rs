use yewdux::prelude::*;

use crate::data::MealType;

/// Visibility flags for the globally reachable modals, plus the meal a
/// diary section handed to the add-food flow. One injected store, not
/// ambient globals.
#[derive(Debug, Clone, PartialEq, Store)]
pub struct Ui {
	pub show_add_food: bool,
	pub show_add_weight: bool,
	pub show_add_library_food: bool,
	pub selected_meal: MealType,
}
impl Default for Ui {
	fn default() -> Self {
		Self {
			show_add_food: false,
			show_add_weight: false,
			show_add_library_food: false,
			selected_meal: MealType::Breakfast,
		}
	}
}

impl Ui {
	pub fn open_add_food(meal: Option<MealType>) {
		Dispatch::<Self>::global().reduce_mut(|ui| {
			ui.show_add_food = true;
			ui.selected_meal = meal.unwrap_or(MealType::Breakfast);
		});
	}

	pub fn close_add_food() {
		Dispatch::<Self>::global().reduce_mut(|ui| ui.show_add_food = false);
	}

	pub fn open_add_weight() {
		Dispatch::<Self>::global().reduce_mut(|ui| ui.show_add_weight = true);
	}

	pub fn close_add_weight() {
		Dispatch::<Self>::global().reduce_mut(|ui| ui.show_add_weight = false);
	}

	pub fn open_add_library_food() {
		Dispatch::<Self>::global().reduce_mut(|ui| ui.show_add_library_food = true);
	}

	pub fn close_add_library_food() {
		Dispatch::<Self>::global().reduce_mut(|ui| ui.show_add_library_food = false);
	}
}
