//! End-to-end behaviour of the chained IEF → SDS-PAGE run, the way the
//! HTTP layer drives it: the IEF result's final x positions are written
//! back into the records before the SDS stage.

use proteogel_common::ProteinRecord;
use proteogel_engine::{simulate_ief, simulate_sds, IefParams, SdsParams, YAxisMode};

fn protein(name: &str, sequence: &str) -> ProteinRecord {
    let mw = proteogel_engine::residues::molecular_weight(sequence);
    let ph = proteogel_engine::residues::theoretical_pi(sequence);
    serde_json::from_value(serde_json::json!({
        "name": name,
        "sequence": sequence,
        "mw": mw,
        "pH": ph,
    }))
    .unwrap()
}

fn sample_batch() -> Vec<ProteinRecord> {
    vec![
        protein("basic", "RKRKHHGGSTV"),
        protein("acidic", "DDEEDESTGGA"),
        protein("neutral", "AAAAGGGGLLLL"),
    ]
}

#[test]
fn chained_run_preserves_x_across_all_sds_steps() {
    let proteins = sample_batch();
    let ief_params = IefParams { seed: Some(7), ..IefParams::default() };
    let ief = simulate_ief(&proteins, &ief_params).unwrap();

    // Thread the focused x back into the records, as the caller does.
    let focused: Vec<ProteinRecord> = ief
        .final_step()
        .unwrap()
        .iter()
        .map(|frame| frame.protein.clone())
        .collect();

    let sds = simulate_sds(&focused, &SdsParams::default());
    assert_eq!(sds.step_count(), 26);
    for (idx, record) in focused.iter().enumerate() {
        for step in sds.steps() {
            assert_eq!(step[idx].protein.x, record.x);
            assert_eq!(step[idx].protein.name, record.name);
        }
    }
}

#[test]
fn chained_run_keeps_display_metadata_intact() {
    let mut proteins = sample_batch();
    proteins[0].color = "#FF0000".to_string();
    proteins[0].organism = "Homo sapiens".to_string();
    proteins[0].link = "https://www.uniprot.org/uniprotkb/P69905".to_string();

    let ief_params = IefParams { seed: Some(7), ..IefParams::default() };
    let ief = simulate_ief(&proteins, &ief_params).unwrap();
    for step in ief.steps() {
        assert_eq!(step[0].protein.color, "#FF0000");
        assert_eq!(step[0].protein.organism, "Homo sapiens");
        assert_eq!(step[0].protein.link, "https://www.uniprot.org/uniprotkb/P69905");
    }

    let sds = simulate_sds(&proteins, &SdsParams::default());
    for step in sds.steps() {
        assert_eq!(step[0].protein.color, "#FF0000");
    }
}

#[test]
fn ief_orders_proteins_by_isoelectric_point() {
    let proteins = sample_batch();
    let ief_params = IefParams { seed: Some(11), ..IefParams::default() };
    let ief = simulate_ief(&proteins, &ief_params).unwrap();
    let last = ief.final_step().unwrap();

    // basic (high pI) focuses to the right of acidic (low pI).
    assert!(last[0].protein.x > last[1].protein.x);
    // neutral carries the 7.0 sentinel pI and lands between them.
    assert!(last[2].protein.x > last[1].protein.x);
    assert!(last[2].protein.x < last[0].protein.x);
}

#[test]
fn sds_modes_agree_on_mass_ordering() {
    let proteins = sample_batch();
    for mode in [YAxisMode::Mw, YAxisMode::Distance] {
        let params = SdsParams { y_axis_mode: mode, ..SdsParams::default() };
        let sds = simulate_sds(&proteins, &params);
        let last = sds.final_step().unwrap();
        let mut by_mass: Vec<(f64, f64)> = proteins
            .iter()
            .zip(last.iter())
            .map(|(p, f)| (p.mw, f.protein.y))
            .collect();
        by_mass.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        // Lighter proteins end up lower on the canvas (larger y).
        assert!(by_mass[0].1 >= by_mass[1].1);
        assert!(by_mass[1].1 >= by_mass[2].1);
    }
}

#[test]
fn result_serialises_as_raw_nested_array() {
    let proteins = sample_batch();
    let ief_params = IefParams { steps: 2, seed: Some(3), ..IefParams::default() };
    let ief = simulate_ief(&proteins, &ief_params).unwrap();
    let value = serde_json::to_value(&ief).unwrap();
    let steps = value.as_array().expect("top level is an array");
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0].as_array().unwrap().len(), 3);
    assert!(steps[0][0]["bandWidth"].is_number());
}
