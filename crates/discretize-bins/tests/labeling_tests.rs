//! Cross-strategy labeling behavior
//!
//! Every strategy hands back one label per input value, in input order,
//! drawn from an ascending `Bin_1..Bin_k` vocabulary. These tests pin
//! that shared contract plus the documented placement rules of each
//! strategy.

use discretize_bins::{
    custom_binning, equal_frequency_binning, equal_width_binning, jenks_natural_breaks,
    quantile_binning, standard_deviation_binning, BinLabel,
};

#[cfg(feature = "kmeans")]
use discretize_bins::kmeans_binning;

fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 * 0.5).collect()
}

#[test]
fn test_every_strategy_labels_in_input_order() {
    let sample = vec![9.0, 1.0, 5.0, 3.0, 7.0, 2.0, 8.0, 4.0, 6.0, 0.0];
    let results = vec![
        equal_width_binning(&sample, 3).unwrap(),
        equal_frequency_binning(&sample, 5).unwrap(),
        quantile_binning(&sample, 4).unwrap(),
        jenks_natural_breaks(&sample, 3).unwrap(),
        standard_deviation_binning(&sample, 2).unwrap(),
        custom_binning(&sample, vec![0.0, 5.0, 10.0]).unwrap(),
    ];
    for result in results {
        assert_eq!(result.len(), sample.len());
        assert!(result.assignments().iter().all(|&a| a < result.n_bins()));
    }
}

#[test]
fn test_vocabulary_is_ascending_bin_labels() {
    let result = equal_width_binning(&ramp(40), 6).unwrap();
    let expected: Vec<BinLabel> = (1..=6).map(BinLabel::new).collect();
    assert_eq!(result.labels(), expected.as_slice());
    assert_eq!(result.labels()[0].to_string(), "Bin_1");
    assert_eq!(result.labels()[5].to_string(), "Bin_6");
}

#[test]
fn test_equal_width_pins_min_and_max() {
    let sample = vec![3.0, 18.0, 7.5, 11.0, 3.0, 18.0, 9.9];
    let result = equal_width_binning(&sample, 5).unwrap();
    assert_eq!(result.label_of(0).to_string(), "Bin_1");
    assert_eq!(result.label_of(1).to_string(), "Bin_5");
}

#[test]
fn test_equal_frequency_splits_ranks_evenly() {
    let sample: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let result = equal_frequency_binning(&sample, 5).unwrap();
    assert_eq!(result.counts(), vec![2, 2, 2, 2, 2]);
    assert_eq!(result.assignments(), &[0, 0, 1, 1, 2, 2, 3, 3, 4, 4]);
}

#[test]
fn test_std_dev_center_lands_in_a_middle_bin() {
    let mut sample: Vec<f64> = (1..=50)
        .flat_map(|i| [i as f64 / 25.0, -(i as f64) / 25.0])
        .collect();
    sample.push(0.0);

    let result = standard_deviation_binning(&sample, 2).unwrap();
    assert_eq!(result.n_bins(), 4);

    let zero = sample.iter().position(|&v| v == 0.0).unwrap();
    let bin = result.assignments()[zero];
    assert!(bin == 1 || bin == 2, "center landed in bin {}", bin);
}

#[test]
fn test_std_dev_far_value_falls_through_to_last_bin() {
    let mut sample: Vec<f64> = (1..=50)
        .flat_map(|i| [i as f64 / 25.0, -(i as f64) / 25.0])
        .collect();
    sample.push(100.0);

    let result = standard_deviation_binning(&sample, 1).unwrap();
    let outlier = sample.iter().position(|&v| v == 100.0).unwrap();
    assert_eq!(result.assignments()[outlier], result.n_bins() - 1);
}

#[test]
fn test_custom_edges_place_and_fall_through() {
    let result = custom_binning(&[15.0, -5.0, 25.0], vec![0.0, 10.0, 20.0, 30.0]).unwrap();
    assert_eq!(result.label_of(0).to_string(), "Bin_2");
    assert_eq!(result.label_of(1).to_string(), "Bin_3");
    assert_eq!(result.label_of(2).to_string(), "Bin_3");
}

#[cfg(feature = "kmeans")]
#[test]
fn test_kmeans_cluster_members_share_bins() {
    let sample = vec![0.1, 0.2, 0.15, 8.0, 8.1, 7.9, 4.0, 4.05, 3.95];
    let result = kmeans_binning(&sample, 3).unwrap();

    assert_eq!(result.assignments()[0], result.assignments()[1]);
    assert_eq!(result.assignments()[0], result.assignments()[2]);
    assert_eq!(result.assignments()[3], result.assignments()[4]);
    assert_eq!(result.assignments()[3], result.assignments()[5]);
    assert_eq!(result.assignments()[6], result.assignments()[7]);

    // Clusters are relabeled in ascending centroid order
    assert_eq!(result.assignments()[0], 0);
    assert_eq!(result.assignments()[6], 1);
    assert_eq!(result.assignments()[3], 2);
}

#[test]
fn test_jenks_and_quantile_disagree_on_outliers() {
    // Quantile edges chase rank while Jenks edges chase variance
    let sample = vec![1.0, 2.0, 3.0, 4.0, 100.0, 101.0];

    let jenks = jenks_natural_breaks(&sample, 2).unwrap();
    assert_eq!(jenks.assignments(), &[0, 0, 0, 0, 1, 1]);

    let quantile = quantile_binning(&sample, 2).unwrap();
    assert_eq!(quantile.assignments(), &[0, 0, 0, 1, 1, 1]);
}

#[test]
fn test_counts_account_for_every_value() {
    let result = equal_frequency_binning(&ramp(33), 4).unwrap();
    assert_eq!(result.counts().iter().sum::<usize>(), 33);

    for (i, label) in result.labeled().iter().enumerate() {
        assert_eq!(*label, result.label_of(i));
    }
}
