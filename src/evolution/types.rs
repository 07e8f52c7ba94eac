//! Core trait for evolution steps.

/// Output of one evolution step.
///
/// The generator treats results as opaque values. The only thing it needs
/// is the snapshot from which the following step starts.
///
/// # Implementing
///
/// ```
/// use u_evostream::evolution::EvolutionResult;
///
/// #[derive(Clone)]
/// struct Start {
///     population: Vec<f64>,
///     generation: u64,
/// }
///
/// struct Step {
///     population: Vec<f64>,
///     generation: u64,
///     best: f64,
/// }
///
/// impl EvolutionResult for Step {
///     type Start = Start;
///
///     fn next(&self) -> Start {
///         Start {
///             population: self.population.clone(),
///             generation: self.generation + 1,
///         }
///     }
/// }
/// ```
pub trait EvolutionResult {
    /// Snapshot type fed to the next step.
    type Start;

    /// Snapshot from which the following step starts.
    fn next(&self) -> Self::Start;
}
