//! Validate the WGSL program and its binding contract without a GPU.

use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{AddressSpace, ShaderStage, StorageAccess};
use spectrum_bars::gpu::{
    BarParams, FRAGMENT_ENTRY, MAGNITUDES_BINDING, PARAMS_BINDING, SHADER_SOURCE, VERTEX_ENTRY,
};

fn parse_shader() -> naga::Module {
    naga::front::wgsl::parse_str(SHADER_SOURCE).expect("shader should parse")
}

fn global_at(module: &naga::Module, group: u32, binding: u32) -> &naga::GlobalVariable {
    module
        .global_variables
        .iter()
        .map(|(_, var)| var)
        .find(|var| {
            var.binding
                .as_ref()
                .is_some_and(|b| b.group == group && b.binding == binding)
        })
        .unwrap_or_else(|| panic!("no global at group {group} binding {binding}"))
}

#[test]
fn test_shader_validates() {
    let module = parse_shader();
    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::empty());
    validator.validate(&module).expect("shader should validate");
}

#[test]
fn test_shader_entry_points() {
    let module = parse_shader();
    let stages: Vec<(&str, ShaderStage)> = module
        .entry_points
        .iter()
        .map(|ep| (ep.name.as_str(), ep.stage))
        .collect();

    assert_eq!(stages.len(), 2);
    assert!(stages.contains(&(VERTEX_ENTRY, ShaderStage::Vertex)));
    assert!(stages.contains(&(FRAGMENT_ENTRY, ShaderStage::Fragment)));
}

#[test]
fn test_magnitudes_binding_is_read_only_storage() {
    let module = parse_shader();
    let magnitudes = global_at(&module, 0, MAGNITUDES_BINDING);
    assert_eq!(magnitudes.name.as_deref(), Some("magnitudes"));
    match magnitudes.space {
        AddressSpace::Storage { access } => {
            assert!(access.contains(StorageAccess::LOAD));
            assert!(!access.contains(StorageAccess::STORE));
        }
        other => panic!("magnitudes should be storage, got {other:?}"),
    }
}

#[test]
fn test_params_binding_is_uniform_matching_host_struct() {
    let module = parse_shader();
    let params = global_at(&module, 0, PARAMS_BINDING);
    assert_eq!(params.name.as_deref(), Some("params"));
    assert_eq!(params.space, AddressSpace::Uniform);

    match &module.types[params.ty].inner {
        naga::TypeInner::Struct { members, span } => {
            assert_eq!(*span as u64, BarParams::SIZE);
            assert_eq!(members[0].name.as_deref(), Some("num_bars"));
            assert_eq!(members[0].offset, 0);
        }
        other => panic!("params should be a struct, got {other:?}"),
    }
}

#[test]
fn test_only_two_bindings() {
    let module = parse_shader();
    let bound = module
        .global_variables
        .iter()
        .filter(|(_, var)| var.binding.is_some())
        .count();
    assert_eq!(bound, 2);
}
