//! Run orchestration: backend selection and cycle evaluation.

use crate::config::{Backend, CycleConfig};
use crate::error::{AppError, AppResult};
use orc_core::units::{Pressure, Temperature};
use orc_cycle::{CycleSolution, evaluate};
use orc_fluids::{ConstantPropertyModel, CoolPropModel, FluidModel, WorkingFluid};
use tracing::info;

/// Outcome of a run, ready for reporting.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub name: String,
    /// Name reported by the fluid property model
    pub backend_name: String,
    pub solution: CycleSolution,
}

/// Critical point of one working fluid as seen by a backend.
#[derive(Debug, Clone)]
pub struct FluidSummary {
    pub fluid: WorkingFluid,
    /// `None` when the backend does not cover this fluid
    pub critical_temperature: Option<Temperature>,
    pub critical_pressure: Option<Pressure>,
}

fn backend_model(backend: Backend) -> Box<dyn FluidModel> {
    match backend {
        Backend::CoolProp => Box::new(CoolPropModel::new()),
        Backend::Surrogate => Box::new(ConstantPropertyModel::carbon_dioxide()),
    }
}

/// Build the fluid property model for `backend`.
///
/// The surrogate only carries parameters for carbon dioxide.
pub fn build_fluid_model(backend: Backend, fluid: WorkingFluid) -> AppResult<Box<dyn FluidModel>> {
    let model = backend_model(backend);
    if !model.supports_fluid(fluid) {
        return Err(AppError::InvalidInput(format!(
            "{} backend has no property data for {}",
            backend, fluid
        )));
    }

    Ok(model)
}

/// Evaluate the cycle described by `config`.
pub fn run(config: &CycleConfig) -> AppResult<RunResponse> {
    let params = config.to_parameters()?;
    let model = build_fluid_model(config.backend, params.fluid)?;
    info!(
        backend = %config.backend,
        model = model.name(),
        fluid = %params.fluid,
        "starting cycle run"
    );

    let solution = evaluate(model.as_ref(), &params)?;

    Ok(RunResponse {
        name: config.name.clone(),
        backend_name: model.name().to_string(),
        solution,
    })
}

/// Critical points of every known working fluid for `backend`.
pub fn list_fluids(backend: Backend) -> Vec<FluidSummary> {
    let model = backend_model(backend);

    WorkingFluid::ALL
        .iter()
        .map(|&fluid| {
            let supported = model.supports_fluid(fluid);
            FluidSummary {
                fluid,
                critical_temperature: supported
                    .then(|| model.critical_temperature(fluid).ok())
                    .flatten(),
                critical_pressure: supported
                    .then(|| model.critical_pressure(fluid).ok())
                    .flatten(),
            }
        })
        .collect()
}
