//! Compute and print a full FSO link budget
//!
//! Run with: cargo run --example link_budget_demo -p fsolink-core

use fsolink_core::observe::{init_logging, LogConfig};
use fsolink_core::{flatten, InputParameters, LinkBudget};

fn main() {
    init_logging(&LogConfig::default());

    // 40,000 km optical crosslink: 2.5 W laser, 15 cm apertures, 1550 nm
    let params = InputParameters::new()
        .tx_power_dbm(34.0)
        .tx_efficiency(0.5)
        .rx_efficiency(0.5)
        .wavelength_m(1.55e-6)
        .tx_diameter_m(0.15)
        .rx_diameter_m(0.15)
        .distance_m(4.0e7)
        .implementation_loss_db(1.0)
        .coupling_loss_db(4.0)
        .tx_pointing_loss_db(1.5)
        .rx_pointing_loss_db(1.5)
        .rx_lna_gain_db(20.0)
        .rx_sensitivity_dbm(-60.0);

    let result = LinkBudget::new(params.clone())
        .compute()
        .expect("reference scenario validates");

    println!("FSO Link Budget ({:.0} km @ {:.0} nm)\n", result.inputs.distance_km, result.inputs.wavelength_nm);

    println!("  TX power            {:>10.2} dBm ({:.0} mW)", result.inputs.tx_power_dbm, result.inputs.tx_power_mw);
    println!("  TX antenna gain     {:>10.2} dB", result.antenna_gains.tx_gain_db);
    println!("  RX antenna gain     {:>10.2} dB", result.antenna_gains.rx_gain_db);
    println!("  Beam divergence     {:>10.4} mrad", result.beam_divergence.tx_theta_mrad);
    println!();
    println!("  Path loss           {:>10.2} dB", result.losses.path_loss_db);
    println!("  Implementation loss {:>10.2} dB", result.losses.implementation_loss_db);
    println!("  Coupling loss       {:>10.2} dB", result.losses.coupling_loss_db);
    println!("  TX pointing loss    {:>10.2} dB", result.losses.tx_pointing_loss_db);
    println!("  RX pointing loss    {:>10.2} dB", result.losses.rx_pointing_loss_db);
    println!("  Total loss          {:>10.2} dB", result.losses.total_loss_db);
    println!();
    println!("  Received power      {:>10.2} dBm", result.received_power.power_dbm);
    println!("  With LNA            {:>10.2} dBm", result.received_power_with_lna.power_dbm);

    if let Some(margin_db) = result.link_margin.margin_db {
        let verdict = if result.link_margin.link_viable == Some(true) {
            "LINK CLOSES"
        } else {
            "LINK FAILS"
        };
        println!("  Link margin         {margin_db:>10.2} dB     {verdict}");
    }

    // Same link, but let a 5 microradian boresight error drive the TX
    // pointing loss instead of the fixed allocation
    let misaligned = LinkBudget::new(params.tx_pointing_error_rad(5.0e-6))
        .compute()
        .expect("misaligned scenario validates");
    println!(
        "\n  With 5 urad TX boresight error: pointing loss {:.2} dB, margin {:.2} dB",
        misaligned.losses.tx_pointing_loss_db,
        misaligned.link_margin.margin_db.expect("sensitivity was supplied"),
    );

    // Flat record, as a frontend would consume it
    let report = flatten(&result);
    let json = serde_json::to_string_pretty(&report).expect("report serializes");
    println!("\nFlat report:\n{json}");
}
