use serde::{Deserialize, Serialize};

/// One fully-connected layer: a row-major weight matrix of
/// `outputs × inputs` entries plus one bias per output row.
///
/// Invariants: `weights.len() == inputs * outputs` and
/// `biases.len() == outputs`. Constructed only through
/// `dominion_core::policy`, which upholds both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyLayer {
    pub inputs: usize,
    pub outputs: usize,
    pub weights: Vec<f32>,
    pub biases: Vec<f32>,
}

impl PolicyLayer {
    /// Weight row feeding output neuron `row`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f32] {
        &self.weights[row * self.inputs..(row + 1) * self.inputs]
    }

    #[must_use]
    pub fn row_mut(&mut self, row: usize) -> &mut [f32] {
        &mut self.weights[row * self.inputs..(row + 1) * self.inputs]
    }
}

/// A feedforward policy network: ordered layers where each layer's output
/// size equals the next layer's input size. Serves both as an agent brain
/// and as a faction's government brain.
///
/// `fitness` is scratch state for the evolution step; it ranks networks at
/// generation boundaries and means nothing outside them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyNetwork {
    pub layers: Vec<PolicyLayer>,
    pub fitness: f32,
}

impl PolicyNetwork {
    /// Layer-size list, e.g. `[48, 32, 16, 9]` for a three-layer network.
    #[must_use]
    pub fn topology(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.layers.len() + 1);
        if let Some(first) = self.layers.first() {
            sizes.push(first.inputs);
        }
        for layer in &self.layers {
            sizes.push(layer.outputs);
        }
        sizes
    }

    #[must_use]
    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, |l| l.inputs)
    }

    #[must_use]
    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, |l| l.outputs)
    }

    /// Hex-encoded DNA string for export and cross-world exchange.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(bytes)
    }

    pub fn from_hex(hex_str: &str) -> anyhow::Result<Self> {
        let bytes = hex::decode(hex_str)?;
        let network = serde_json::from_slice(&bytes)?;
        Ok(network)
    }
}
