//! Spot map extraction from RT Ion Plan datasets.
//!
//! An RT Ion Plan nests its pencil beam scanning data two levels deep:
//! each item of the Ion Beam Sequence is a field, and each item of that
//! beam's Ion Control Point Sequence is one energy layer with its scan
//! spot positions, meterset weights and nominal energy.

use dicom_core::Tag;
use dicom_dictionary_std::tags;
use dicom_object::mem::InMemElement;
use dicom_object::InMemDicomObject;
use dicomplot_core::{Energy, Field, PlanMaps, SpotMap};
use log::{debug, info, warn};

use crate::{Error, Result};

const ION_BEAM_SEQUENCE: &str = "IonBeamSequence";
const ION_CONTROL_POINT_SEQUENCE: &str = "IonControlPointSequence";
const SCAN_SPOT_POSITION_MAP: &str = "ScanSpotPositionMap";
const SCAN_SPOT_METERSET_WEIGHTS: &str = "ScanSpotMetersetWeights";
const NOMINAL_BEAM_ENERGY: &str = "NominalBeamEnergy";

/// Location of a control point, used for error context.
#[derive(Clone, Copy)]
struct LayerIndex {
    beam: usize,
    control_point: usize,
}

fn sequence_items<'a>(
    obj: &'a InMemDicomObject,
    tag: Tag,
    name: &'static str,
) -> Result<&'a [InMemDicomObject]> {
    obj.get(tag)
        .and_then(|elem| elem.items())
        .ok_or(Error::MissingSequence { name })
}

fn sequence_item<'a>(
    obj: &'a InMemDicomObject,
    tag: Tag,
    name: &'static str,
    index: usize,
) -> Result<&'a InMemDicomObject> {
    let items = sequence_items(obj, tag, name)?;
    items.get(index).ok_or(Error::MissingItem {
        name,
        index,
        len: items.len(),
    })
}

fn required<'a>(
    item: &'a InMemDicomObject,
    tag: Tag,
    name: &'static str,
    at: LayerIndex,
) -> Result<&'a InMemElement> {
    item.get(tag).ok_or(Error::MissingAttribute {
        beam: at.beam,
        control_point: at.control_point,
        name,
    })
}

fn float_values(
    item: &InMemDicomObject,
    tag: Tag,
    name: &'static str,
    at: LayerIndex,
) -> Result<Vec<f64>> {
    required(item, tag, name, at)?
        .to_multi_float64()
        .map_err(|source| Error::Convert {
            beam: at.beam,
            control_point: at.control_point,
            name,
            source,
        })
}

/// Nominal Beam Energy is type 1C: absent or empty means unknown.
fn nominal_energy(item: &InMemDicomObject, at: LayerIndex) -> Result<Energy> {
    let Some(elem) = item.get(tags::NOMINAL_BEAM_ENERGY) else {
        return Ok(Energy::Unknown);
    };
    let text = elem.to_str().map_err(|source| Error::Convert {
        beam: at.beam,
        control_point: at.control_point,
        name: NOMINAL_BEAM_ENERGY,
        source,
    })?;
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    if text.is_empty() {
        return Ok(Energy::Unknown);
    }
    text.parse::<f64>()
        .map(Energy::Nominal)
        .map_err(|_| Error::InvalidNumber {
            beam: at.beam,
            control_point: at.control_point,
            name: NOMINAL_BEAM_ENERGY,
            value: text.to_string(),
        })
}

fn optional_string(obj: &InMemDicomObject, tag: Tag) -> Option<String> {
    let elem = obj.get(tag)?;
    match elem.to_str() {
        Ok(s) => {
            let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\0');
            (!s.is_empty()).then(|| s.to_string())
        }
        Err(e) => {
            debug!("Ignoring unreadable {tag}: {e}");
            None
        }
    }
}

fn optional_int(obj: &InMemDicomObject, tag: Tag) -> Option<i32> {
    let elem = obj.get(tag)?;
    match elem.to_int::<i32>() {
        Ok(v) => Some(v),
        Err(e) => {
            debug!("Ignoring unreadable {tag}: {e}");
            None
        }
    }
}

fn spot_map_from_item(item: &InMemDicomObject, at: LayerIndex) -> Result<SpotMap> {
    let positions = float_values(item, tags::SCAN_SPOT_POSITION_MAP, SCAN_SPOT_POSITION_MAP, at)?;
    let weights = float_values(
        item,
        tags::SCAN_SPOT_METERSET_WEIGHTS,
        SCAN_SPOT_METERSET_WEIGHTS,
        at,
    )?;
    let energy = nominal_energy(item, at)?;

    SpotMap::new(positions, weights, energy).map_err(|source| Error::InvalidLayer {
        beam: at.beam,
        control_point: at.control_point,
        source,
    })
}

/// Reads control point `control_point_index` of one beam.
fn beam_layer(
    beam: &InMemDicomObject,
    beam_index: usize,
    control_point_index: usize,
) -> Result<SpotMap> {
    info!("Getting spot map for beam {beam_index}, control point {control_point_index}");
    let control_point = sequence_item(
        beam,
        tags::ION_CONTROL_POINT_SEQUENCE,
        ION_CONTROL_POINT_SEQUENCE,
        control_point_index,
    )?;
    spot_map_from_item(
        control_point,
        LayerIndex {
            beam: beam_index,
            control_point: control_point_index,
        },
    )
}

/// Extracts one energy layer from a plan.
///
/// # Errors
/// Returns an error if either sequence is missing or too short, if the
/// position map or weights are missing or malformed, or if they do not
/// describe the same number of spots.
pub fn extract_spot_map(
    obj: &InMemDicomObject,
    beam_index: usize,
    control_point_index: usize,
) -> Result<SpotMap> {
    let beam = sequence_item(obj, tags::ION_BEAM_SEQUENCE, ION_BEAM_SEQUENCE, beam_index)?;
    beam_layer(beam, beam_index, control_point_index)
}

/// Extracts every layer of every field, in file order.
///
/// # Errors
/// Returns an error if the plan lacks the beam/control point structure,
/// if any layer is malformed, or if the plan has no fields or a field has
/// no layers.
pub fn extract_plan(obj: &InMemDicomObject) -> Result<PlanMaps> {
    if let Some(modality) = optional_string(obj, tags::MODALITY) {
        if modality != "RTPLAN" {
            warn!("Modality is {modality}, expected RTPLAN");
        }
    }

    let beams = sequence_items(obj, tags::ION_BEAM_SEQUENCE, ION_BEAM_SEQUENCE)?;
    let mut fields = Vec::with_capacity(beams.len());

    for (beam_index, beam) in beams.iter().enumerate() {
        let layer_count = sequence_items(
            beam,
            tags::ION_CONTROL_POINT_SEQUENCE,
            ION_CONTROL_POINT_SEQUENCE,
        )?
        .len();
        let layers = (0..layer_count)
            .map(|cp_index| beam_layer(beam, beam_index, cp_index))
            .collect::<Result<Vec<_>>>()?;

        fields.push(
            Field::new(layers)
                .with_beam_number(optional_int(beam, tags::BEAM_NUMBER))
                .with_beam_name(optional_string(beam, tags::BEAM_NAME)),
        );
    }

    let plan = PlanMaps::new(fields)?.with_label(optional_string(obj, tags::RT_PLAN_LABEL));
    Ok(plan)
}
