#![allow(clippy::uninlined_format_args, clippy::cast_precision_loss)]
use std::io::Write;

use approx::assert_relative_eq;
use dicom_core::value::{DataSetSequence, PrimitiveValue};
use dicom_core::{DataElement, VR};
use dicom_dictionary_std::tags;
use dicom_object::meta::FileMetaTableBuilder;
use dicom_object::InMemDicomObject;
use dicomplot_core::{global_max_weight, Energy, PlanShape};
use dicomplot_io::{extract_plan, read_plan, Error};
use tempfile::NamedTempFile;

const RT_ION_PLAN_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.8";
const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";

// Layer `i` of beam `b` gets `i + 1` spots with weights (b + 1) * 0.5 * (k + 1).
fn control_point(beam: usize, index: usize, energy: Option<&str>) -> InMemDicomObject {
    let spots = index + 1;
    let positions: Vec<f32> = (0..spots)
        .flat_map(|k| [k as f32 * 5.0, -(k as f32) * 2.5])
        .collect();
    let weights: Vec<f32> = (0..spots)
        .map(|k| (beam + 1) as f32 * 0.5 * (k + 1) as f32)
        .collect();

    let mut cp = InMemDicomObject::from_element_iter([
        DataElement::new(
            tags::SCAN_SPOT_POSITION_MAP,
            VR::FL,
            PrimitiveValue::F32(positions.into_iter().collect()),
        ),
        DataElement::new(
            tags::SCAN_SPOT_METERSET_WEIGHTS,
            VR::FL,
            PrimitiveValue::F32(weights.into_iter().collect()),
        ),
    ]);
    if let Some(energy) = energy {
        cp.put(DataElement::new(
            tags::NOMINAL_BEAM_ENERGY,
            VR::DS,
            PrimitiveValue::from(energy),
        ));
    }
    cp
}

fn beam(number: usize, name: &str, layers: usize) -> InMemDicomObject {
    let control_points: Vec<InMemDicomObject> = (0..layers)
        .map(|i| {
            // Only the first control point of a beam carries the energy.
            let energy = (i == 0).then_some("150.5");
            control_point(number - 1, i, energy)
        })
        .collect();

    InMemDicomObject::from_element_iter([
        DataElement::new(
            tags::BEAM_NUMBER,
            VR::IS,
            PrimitiveValue::from(number.to_string()),
        ),
        DataElement::new(tags::BEAM_NAME, VR::LO, PrimitiveValue::from(name)),
        DataElement::new(
            tags::ION_CONTROL_POINT_SEQUENCE,
            VR::SQ,
            DataSetSequence::from(control_points),
        ),
    ])
}

fn sample_plan() -> InMemDicomObject {
    InMemDicomObject::from_element_iter([
        DataElement::new(tags::MODALITY, VR::CS, PrimitiveValue::from("RTPLAN")),
        DataElement::new(tags::RT_PLAN_LABEL, VR::SH, PrimitiveValue::from("PBS TEST")),
        DataElement::new(
            tags::ION_BEAM_SEQUENCE,
            VR::SQ,
            DataSetSequence::from(vec![beam(1, "G0", 3), beam(2, "G90", 2)]),
        ),
    ])
}

#[test]
fn test_extract_shape_and_values() {
    let plan = extract_plan(&sample_plan()).unwrap();

    assert_eq!(plan.field_count(), 2);
    assert_eq!(plan.layer_counts(), vec![3, 2]);
    assert_eq!(plan.label.as_deref(), Some("PBS TEST"));
    assert_eq!(plan.fields()[1].beam_number, Some(2));
    assert_eq!(plan.fields()[1].beam_name.as_deref(), Some("G90"));

    let first = plan.layer(0, 0).unwrap();
    assert_eq!(first.energy(), Energy::Nominal(150.5));
    assert_eq!(first.len(), 1);

    let third = plan.layer(0, 2).unwrap();
    assert_eq!(third.energy(), Energy::Unknown);
    assert_eq!(third.len(), 3);
    assert_eq!(third.positions(), &[0.0, 0.0, 5.0, -2.5, 10.0, -5.0]);

    // Beam 2, layer 2: weights 1.0, 2.0
    assert_relative_eq!(global_max_weight(&plan), 2.0);
}

#[test]
fn test_read_plan_from_disk() {
    let file_obj = sample_plan()
        .with_meta(
            FileMetaTableBuilder::new()
                .media_storage_sop_class_uid(RT_ION_PLAN_STORAGE)
                .media_storage_sop_instance_uid("2.25.314159265358979")
                .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN),
        )
        .unwrap();

    let file = NamedTempFile::new().unwrap();
    file_obj.write_to_file(file.path()).unwrap();

    let plan = read_plan(file.path()).unwrap();
    assert_eq!(plan.layer_counts(), vec![3, 2]);
    assert_eq!(plan.spot_count(), 1 + 2 + 3 + 1 + 2);
    assert_relative_eq!(plan.layer(1, 1).unwrap().weights()[1], 2.0);
}

#[test]
fn test_missing_beam_sequence() {
    let obj = InMemDicomObject::from_element_iter([DataElement::new(
        tags::MODALITY,
        VR::CS,
        PrimitiveValue::from("RTPLAN"),
    )]);
    let err = extract_plan(&obj).unwrap_err();
    assert!(
        matches!(err, Error::MissingSequence { name } if name == "IonBeamSequence"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_missing_weights() {
    let cp = InMemDicomObject::from_element_iter([DataElement::new(
        tags::SCAN_SPOT_POSITION_MAP,
        VR::FL,
        PrimitiveValue::F32([1.0_f32, 2.0].into_iter().collect()),
    )]);
    let beam = InMemDicomObject::from_element_iter([DataElement::new(
        tags::ION_CONTROL_POINT_SEQUENCE,
        VR::SQ,
        DataSetSequence::from(vec![cp]),
    )]);
    let obj = InMemDicomObject::from_element_iter([DataElement::new(
        tags::ION_BEAM_SEQUENCE,
        VR::SQ,
        DataSetSequence::from(vec![beam]),
    )]);

    let err = extract_plan(&obj).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingAttribute {
            beam: 0,
            control_point: 0,
            name: "ScanSpotMetersetWeights"
        }
    ));
}

#[test]
fn test_beam_without_layers_is_rejected() {
    let beam = InMemDicomObject::from_element_iter([DataElement::new(
        tags::ION_CONTROL_POINT_SEQUENCE,
        VR::SQ,
        DataSetSequence::from(Vec::<InMemDicomObject>::new()),
    )]);
    let obj = InMemDicomObject::from_element_iter([DataElement::new(
        tags::ION_BEAM_SEQUENCE,
        VR::SQ,
        DataSetSequence::from(vec![beam]),
    )]);

    let err = extract_plan(&obj).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(dicomplot_core::Error::EmptyField { field: 0 })
    ));
}

#[test]
fn test_not_a_dicom_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"definitely not a plan").unwrap();
    file.flush().unwrap();

    let err = read_plan(file.path()).unwrap_err();
    assert!(matches!(err, Error::Read(_)), "unexpected error: {}", err);
}
