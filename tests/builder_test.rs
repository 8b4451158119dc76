use pattern_recipe::builder::{Car, CarBuilder, Director, SportsCarBuilder};

/// Every subset and order of setter calls leaves each field at the last value set,
/// and untouched fields at `None`.
#[test]
fn test_fields_hold_last_written_value() {
    let mut builder = SportsCarBuilder::new();
    builder
        .set_wheels("19-inch Carbon Fiber")
        .set_engine("V6 Turbo")
        .set_wheels("20-inch Chrome")
        .set_engine("Electric Motor");

    let car = builder.get_car();
    assert_eq!(car.engine.as_deref(), Some("Electric Motor"));
    assert_eq!(car.wheels.as_deref(), Some("20-inch Chrome"));
    assert_eq!(car.color, None);
    assert!(!car.is_complete());
}

#[test]
fn test_full_chain_builds_complete_car() {
    let car = SportsCarBuilder::new()
        .set_engine("V8 Supercharged")
        .set_wheels("18-inch Alloy")
        .set_color("#EFEFEF")
        .get_car();

    assert!(car.is_complete());
    assert_eq!(
        car.to_string(),
        "Car specs: Engine - V8 Supercharged, Wheels - 18-inch Alloy, Color - #EFEFEF"
    );
}

/// Values are stored as given; nothing is validated.
#[test]
fn test_arbitrary_values_are_accepted() {
    let car = SportsCarBuilder::new()
        .set_engine("")
        .set_color("not a colour")
        .get_car();

    assert_eq!(car.engine.as_deref(), Some(""));
    assert_eq!(car.color.as_deref(), Some("not a colour"));
}

#[test]
fn test_director_works_with_any_builder() {
    /// Builder that upper-cases every value, to show the director only relies on the trait.
    #[derive(Default)]
    struct ShoutingBuilder {
        car: Car,
    }

    impl CarBuilder for ShoutingBuilder {
        fn set_engine(&mut self, engine: impl Into<String>) -> &mut Self {
            self.car.engine = Some(engine.into().to_uppercase());
            self
        }
        fn set_wheels(&mut self, wheels: impl Into<String>) -> &mut Self {
            self.car.wheels = Some(wheels.into().to_uppercase());
            self
        }
        fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
            self.car.color = Some(color.into().to_uppercase());
            self
        }
        fn get_car(&self) -> Car {
            self.car.clone()
        }
    }

    let mut director = Director::new(ShoutingBuilder::default());
    let car = director.build_standard_car("red");
    assert_eq!(car.engine.as_deref(), Some("V8"));
    assert_eq!(car.wheels.as_deref(), Some("18-INCH ALLOY"));
    assert_eq!(car.color.as_deref(), Some("RED"));
}

/// The builder handed back by the director keeps the director's writes.
#[test]
fn test_director_into_builder() {
    let mut director = Director::new(SportsCarBuilder::new());
    director.build_custom_car("V6 Turbo", "19-inch Carbon Fiber", "#000000");

    let mut builder = director.into_builder();
    let car = builder.set_color("#FFFFFF").get_car();
    assert_eq!(car.engine.as_deref(), Some("V6 Turbo"));
    assert_eq!(car.color.as_deref(), Some("#FFFFFF"));
}

#[test]
fn test_car_serializes_unset_fields_as_null() {
    let car = SportsCarBuilder::new().set_engine("V8").get_car();
    let json = serde_json::to_value(&car).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "engine": "V8", "wheels": null, "color": null })
    );
}
