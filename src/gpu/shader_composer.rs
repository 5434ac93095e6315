use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage,
    ShaderType,
};

use crate::error::TunnelError;

/// Beam gradient shader source (vertex + fragment).
pub const BEAM_GRADIENT_WGSL: &str =
    include_str!("../../assets/shaders/beam_gradient.wgsl");

/// Shared fog module source, imported as `tunnel::fog`.
pub const FOG_MODULE_WGSL: &str =
    include_str!("../../assets/shaders/modules/fog.wgsl");

/// Wraps `naga_oil::compose::Composer` to provide shader composition with
/// `#import` support.
///
/// Pre-loads the shared WGSL modules at construction time. Consuming shaders
/// use `#import tunnel::module_name` to pull in shared code. The composer
/// produces `naga::Module` IR directly, skipping WGSL re-parse at runtime.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition.
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

impl ShaderComposer {
    /// Composer with every shared module registered.
    pub fn new() -> Result<Self, TunnelError> {
        let mut composer = Composer::default();

        // Register shared modules in dependency order.
        let modules: &[ModuleDef] = &[ModuleDef {
            source: FOG_MODULE_WGSL,
            file_path: "modules/fog.wgsl",
        }];

        for m in modules {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: m.source,
                    file_path: m.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    TunnelError::Shader(format!(
                        "failed to register module '{}': {e:?}",
                        m.file_path
                    ))
                })?;
        }

        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import`
    /// directives) into a `wgpu::ShaderModule` ready for pipeline creation.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, TunnelError> {
        let naga_module = self.compose_naga(source, file_path)?;
        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose a shader source into a `naga::Module` without creating a wgpu
    /// shader module. Useful for testing shader composition without a GPU
    /// device.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, TunnelError> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| {
                TunnelError::Shader(format!(
                    "failed to compose '{file_path}': {e}"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use naga::valid::{Capabilities, ValidationFlags, Validator};

    use super::*;

    #[test]
    fn beam_shader_composes_and_validates() {
        let mut composer = ShaderComposer::new().unwrap();
        let module = composer
            .compose_naga(BEAM_GRADIENT_WGSL, "beam_gradient.wgsl")
            .unwrap();

        let entry_points: Vec<&str> =
            module.entry_points.iter().map(|e| e.name.as_str()).collect();
        assert!(entry_points.contains(&"vs_main"));
        assert!(entry_points.contains(&"fs_main"));

        let _ = Validator::new(ValidationFlags::all(), Capabilities::all())
            .validate(&module)
            .unwrap();
    }

    #[test]
    fn unknown_import_is_a_shader_error() {
        let mut composer = ShaderComposer::new().unwrap();
        let src = "#import tunnel::missing::{nope}\n\
                   @fragment fn fs_main() -> @location(0) vec4<f32> { \
                   return vec4<f32>(nope(), 1.0); }";
        let err = composer.compose_naga(src, "broken.wgsl").unwrap_err();
        assert!(matches!(err, TunnelError::Shader(_)));
    }
}
