use crate::error::CoreError;
use dominion_data::{PolicyLayer, PolicyNetwork};
use rand::Rng;

/// Hard bound on every weight and bias, enforced after mutation.
pub const WEIGHT_CLAMP: f32 = 5.0;

/// Per-row inheritance probability during crossover.
const ROW_SWAP_CHANCE: f64 = 0.5;

pub trait PolicyLogic: Sized {
    /// Builds a network for the given layer-size list with Xavier-style
    /// initialization: weights uniform in ±√(6/(fan_in+fan_out)), biases at
    /// one tenth that scale.
    fn new_random_with_rng<R: Rng>(topology: &[usize], rng: &mut R) -> Result<Self, CoreError>;

    /// Runs the input vector through every layer (linear transform + tanh).
    /// The input length must match the first layer's input size.
    fn forward(&self, inputs: &[f32]) -> Result<Vec<f32>, CoreError>;

    /// In-place Gaussian perturbation: each weight and bias independently
    /// mutates with probability `rate`, with noise of standard deviation
    /// `strength`, then clamps into [-WEIGHT_CLAMP, WEIGHT_CLAMP].
    fn mutate_with_rng<R: Rng>(&mut self, rate: f32, strength: f32, rng: &mut R);

    /// Child starts as a copy of `self`; per output row, the whole row of
    /// weights and its bias are taken together from `other` with probability
    /// 0.5. Topologies must match.
    fn crossover_with_rng<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<Self, CoreError>;
}

/// Standard-normal sample via Box–Muller; `rand` alone has no Gaussian
/// distribution and the simulation needs only this one.
pub(crate) fn gaussian<R: Rng>(rng: &mut R) -> f32 {
    let u1: f32 = rng.gen::<f32>().clamp(f32::MIN_POSITIVE, 1.0);
    let u2: f32 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (std::f32::consts::TAU * u2).cos()
}

fn validate_topology(topology: &[usize]) -> Result<(), CoreError> {
    if topology.len() < 2 || topology.iter().any(|&s| s == 0) {
        return Err(CoreError::InvalidTopology(topology.to_vec()));
    }
    Ok(())
}

impl PolicyLogic for PolicyNetwork {
    fn new_random_with_rng<R: Rng>(topology: &[usize], rng: &mut R) -> Result<Self, CoreError> {
        validate_topology(topology)?;

        let mut layers = Vec::with_capacity(topology.len() - 1);
        for pair in topology.windows(2) {
            let (inputs, outputs) = (pair[0], pair[1]);
            let limit = (6.0 / (inputs + outputs) as f32).sqrt();
            let bias_limit = limit * 0.1;

            let weights = (0..inputs * outputs)
                .map(|_| rng.gen_range(-limit..limit))
                .collect();
            let biases = (0..outputs)
                .map(|_| rng.gen_range(-bias_limit..bias_limit))
                .collect();

            layers.push(PolicyLayer {
                inputs,
                outputs,
                weights,
                biases,
            });
        }

        Ok(PolicyNetwork {
            layers,
            fitness: 0.0,
        })
    }

    fn forward(&self, inputs: &[f32]) -> Result<Vec<f32>, CoreError> {
        let expected = self.input_size();
        if inputs.len() != expected {
            return Err(CoreError::InputLength {
                expected,
                got: inputs.len(),
            });
        }

        let mut current = inputs.to_vec();
        for layer in &self.layers {
            let mut next = Vec::with_capacity(layer.outputs);
            for row in 0..layer.outputs {
                let mut sum = layer.biases[row];
                for (weight, input) in layer.row(row).iter().zip(&current) {
                    sum += weight * input;
                }
                next.push(sum.tanh());
            }
            current = next;
        }
        Ok(current)
    }

    fn mutate_with_rng<R: Rng>(&mut self, rate: f32, strength: f32, rng: &mut R) {
        let mut mutate_val = |v: &mut f32, rng: &mut R| {
            if rng.gen::<f32>() < rate {
                *v += gaussian(rng) * strength;
                *v = v.clamp(-WEIGHT_CLAMP, WEIGHT_CLAMP);
            }
        };

        for layer in &mut self.layers {
            for w in &mut layer.weights {
                mutate_val(w, rng);
            }
            for b in &mut layer.biases {
                mutate_val(b, rng);
            }
        }
    }

    fn crossover_with_rng<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<Self, CoreError> {
        if self.topology() != other.topology() {
            return Err(CoreError::TopologyMismatch {
                left: self.topology(),
                right: other.topology(),
            });
        }

        let mut child = self.clone();
        child.fitness = 0.0;
        for (child_layer, other_layer) in child.layers.iter_mut().zip(&other.layers) {
            for row in 0..child_layer.outputs {
                if rng.gen_bool(ROW_SWAP_CHANCE) {
                    child_layer
                        .row_mut(row)
                        .copy_from_slice(other_layer.row(row));
                    child_layer.biases[row] = other_layer.biases[row];
                }
            }
        }
        Ok(child)
    }
}
