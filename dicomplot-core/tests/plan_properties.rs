#![allow(clippy::uninlined_format_args, clippy::cast_precision_loss)]
use approx::assert_relative_eq;
use dicomplot_core::{
    global_max_weight, Energy, Field, NavAction, PlanMaps, PlanShape, SpotMap, ViewState,
    WeightScale,
};

fn layer(weights: &[f64]) -> SpotMap {
    let positions = weights
        .iter()
        .enumerate()
        .flat_map(|(i, _)| [i as f64 * 5.0, -(i as f64) * 5.0])
        .collect();
    SpotMap::new(positions, weights.to_vec(), Energy::Nominal(100.0)).unwrap()
}

fn sample_plan() -> PlanMaps {
    PlanMaps::new(vec![
        Field::new(vec![layer(&[0.1, 0.4]), layer(&[2.5]), layer(&[0.7, 0.3, 1.1])]),
        Field::new(vec![layer(&[3.75, 0.2])]),
        Field::new(vec![layer(&[]), layer(&[0.05])]),
    ])
    .unwrap()
}

#[test]
fn test_global_max_matches_brute_force() {
    let plan = sample_plan();
    let mut expected = 0.0_f64;
    for field in plan.fields() {
        for layer in field.layers() {
            for &w in layer.weights() {
                if w > expected {
                    expected = w;
                }
            }
        }
    }
    assert_relative_eq!(global_max_weight(&plan), expected);
    assert_relative_eq!(global_max_weight(&plan), 3.75);
    assert_relative_eq!(WeightScale::for_plan(&plan).max(), 3.75);
}

#[test]
fn test_global_max_of_all_empty_layers_is_zero() {
    let plan = PlanMaps::new(vec![Field::new(vec![layer(&[]), layer(&[])])]).unwrap();
    assert_relative_eq!(global_max_weight(&plan), 0.0);
}

#[test]
fn test_navigation_stays_in_bounds() {
    let plan = sample_plan();
    let actions = [
        NavAction::NextLayer,
        NavAction::NextLayer,
        NavAction::PrevField,
        NavAction::NextLayer,
        NavAction::PrevLayer,
        NavAction::PrevLayer,
        NavAction::NextField,
        NavAction::NextField,
        NavAction::PrevLayer,
        NavAction::NextField,
    ];

    let mut view = ViewState::default();
    for _ in 0..5 {
        for action in actions {
            let field_before = view.field();
            view.apply(action, &plan);

            assert!(view.field() < plan.field_count(), "{:?}", view);
            assert!(view.layer() < plan.layer_count(view.field()), "{:?}", view);
            assert!(plan.layer(view.field(), view.layer()).is_some());
            if view.field() != field_before {
                assert_eq!(view.layer(), 0, "layer not reset after {:?}", action);
            }
        }
    }
}

#[test]
fn test_full_cycle_returns_to_start() {
    let plan = sample_plan();
    let mut view = ViewState::default();

    for _ in 0..plan.field_count() {
        view.next_field(&plan);
    }
    assert_eq!(view, ViewState::default());

    for _ in 0..plan.field_count() {
        view.prev_field(&plan);
    }
    assert_eq!(view, ViewState::default());

    let layers = plan.layer_count(0);
    for step in 1..=layers {
        view.next_layer(&plan);
        assert_eq!(view.layer(), step % layers);
    }
}
