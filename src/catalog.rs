use serde::Deserialize;

/// Supplies the catalogs attached to nodes that declare `sampler_name` or
/// `scheduler` inputs.
///
/// The lists are owned by the execution host and change between releases,
/// so the resolver treats them as opaque ordered strings.
pub trait EnumerationProvider: Send + Sync {
    fn samplers(&self) -> &[String];
    fn schedulers(&self) -> &[String];
}

/// Sampler names known to the host's KSampler, in host order.
pub const DEFAULT_SAMPLERS: &[&str] = &[
    "euler",
    "euler_cfg_pp",
    "euler_ancestral",
    "euler_ancestral_cfg_pp",
    "heun",
    "heunpp2",
    "dpm_2",
    "dpm_2_ancestral",
    "lms",
    "dpm_fast",
    "dpm_adaptive",
    "dpmpp_2s_ancestral",
    "dpmpp_2s_ancestral_cfg_pp",
    "dpmpp_sde",
    "dpmpp_sde_gpu",
    "dpmpp_2m",
    "dpmpp_2m_cfg_pp",
    "dpmpp_2m_sde",
    "dpmpp_2m_sde_gpu",
    "dpmpp_3m_sde",
    "dpmpp_3m_sde_gpu",
    "ddpm",
    "lcm",
    "ipndm",
    "ipndm_v",
    "deis",
    "res_multistep",
    "res_multistep_cfg_pp",
    "gradient_estimation",
    "ddim",
    "uni_pc",
    "uni_pc_bh2",
];

/// Scheduler names known to the host's KSampler, in host order.
pub const DEFAULT_SCHEDULERS: &[&str] = &[
    "normal",
    "karras",
    "exponential",
    "sgm_uniform",
    "simple",
    "ddim_uniform",
    "beta",
    "linear_quadratic",
    "kl_optimal",
];

/// A fixed sampler/scheduler catalog.
///
/// Deserializes from `{"samplers": [...], "schedulers": [...]}`; a missing
/// list falls back to the built-in one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplerCatalog {
    #[serde(default = "default_samplers")]
    samplers: Vec<String>,
    #[serde(default = "default_schedulers")]
    schedulers: Vec<String>,
}

impl SamplerCatalog {
    pub fn new(samplers: Vec<String>, schedulers: Vec<String>) -> Self {
        Self {
            samplers,
            schedulers,
        }
    }
}

impl Default for SamplerCatalog {
    fn default() -> Self {
        Self::new(default_samplers(), default_schedulers())
    }
}

impl EnumerationProvider for SamplerCatalog {
    fn samplers(&self) -> &[String] {
        &self.samplers
    }

    fn schedulers(&self) -> &[String] {
        &self.schedulers
    }
}

fn default_samplers() -> Vec<String> {
    DEFAULT_SAMPLERS.iter().map(|s| s.to_string()).collect()
}

fn default_schedulers() -> Vec<String> {
    DEFAULT_SCHEDULERS.iter().map(|s| s.to_string()).collect()
}
