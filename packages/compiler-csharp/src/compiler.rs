use crate::context::{CompileOptions, Context};
use crate::naming::identifier_fragment;
use crate::registry::SignatureRegistry;
use thiserror::Error;
use tracing::{debug, info, instrument};
use understudy_model::{
    DescriptorError, InterfaceDescriptor, MemberDescriptor, MemberKind, ParamDirection,
    ParameterDescriptor,
};

/// Errors that can occur around stub compilation.
///
/// Translation itself has no failure path for a structurally valid member
/// list — every member shape has a generation rule and signature collisions
/// are handled by renaming — so these cover the descriptor boundary.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid descriptor: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("Compilation error: {0}")]
    Generic(String),
}

impl From<String> for CompileError {
    fn from(s: String) -> Self {
        CompileError::Generic(s)
    }
}

impl From<&str> for CompileError {
    fn from(s: &str) -> Self {
        CompileError::Generic(s.to_string())
    }
}

/// Structural shape of a member, driving which generator runs.
///
/// Computed from the descriptor rather than trusted from its `kind`: a
/// method with a by-reference parameter needs a named callback type, and a
/// property carrying parameters is an indexer.
enum MemberShape<'a> {
    Method(&'a MemberDescriptor),
    ByRefMethod(&'a MemberDescriptor),
    Property(&'a MemberDescriptor),
    Indexer(&'a MemberDescriptor),
    Event(&'a MemberDescriptor),
}

fn classify(member: &MemberDescriptor) -> MemberShape<'_> {
    match member.kind {
        MemberKind::Method => {
            if member.has_by_ref_params() {
                MemberShape::ByRefMethod(member)
            } else {
                MemberShape::Method(member)
            }
        }
        MemberKind::Property => {
            if member.parameters.is_empty() {
                MemberShape::Property(member)
            } else {
                MemberShape::Indexer(member)
            }
        }
        MemberKind::Indexer => MemberShape::Indexer(member),
        MemberKind::Event => MemberShape::Event(member),
    }
}

/// Compile one interface surface into the source text of its stub type.
///
/// Members are translated in the order the introspector supplied them;
/// that order decides which occurrence of a redeclared signature owns the
/// backing field, so the same descriptor sequence always produces
/// byte-identical output.
#[instrument(skip_all, fields(interface = %interface.name, members = interface.members.len()))]
pub fn compile_stub_type(
    interface: &InterfaceDescriptor,
    options: CompileOptions,
) -> Result<String, CompileError> {
    info!("Starting stub translation");

    let mut ctx = Context::new(options);
    let mut registry = SignatureRegistry::new();

    compile_type_frame_open(interface, &mut ctx);

    for (index, member) in interface.members.iter().enumerate() {
        if index > 0 {
            ctx.blank_line();
        }
        debug!(member = %member.name, kind = ?member.kind, declaring = %member.declaring_type, "Translating member");
        compile_member(classify(member), &mut ctx, &mut registry)?;
    }

    ctx.dedent();
    ctx.add_line("}");

    info!("Stub translation complete");
    Ok(ctx.get_output())
}

/// Deserialize a JSON interface descriptor and compile it in one step,
/// for introspectors running out of process.
pub fn compile_stub_type_from_json(
    payload: &str,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let interface = understudy_model::from_json(payload)?;
    compile_stub_type(&interface, options)
}

fn compile_type_frame_open(interface: &InterfaceDescriptor, ctx: &mut Context) {
    let generic_suffix = if interface.generic_params.is_empty() {
        String::new()
    } else {
        format!("<{}>", interface.generic_params.join(", "))
    };

    let stub_name = format!("{}{}", ctx.options().stub_prefix, interface.name);
    ctx.add_line(&format!(
        "public class {}{} : {}",
        stub_name, generic_suffix, interface.qualified_name
    ));
    ctx.add_line("{");
    ctx.indent();
}

fn compile_member(
    shape: MemberShape<'_>,
    ctx: &mut Context,
    registry: &mut SignatureRegistry,
) -> Result<(), CompileError> {
    match shape {
        MemberShape::Method(member) => compile_method(member, ctx, registry),
        MemberShape::ByRefMethod(member) => compile_by_ref_method(member, ctx, registry),
        MemberShape::Property(member) => compile_property(member, ctx, registry),
        MemberShape::Indexer(member) => compile_indexer(member, ctx, registry),
        MemberShape::Event(member) => compile_event(member, ctx, registry),
    }
}

// ---- methods ----

fn compile_method(
    member: &MemberDescriptor,
    ctx: &mut Context,
    registry: &mut SignatureRegistry,
) -> Result<(), CompileError> {
    let key = member.signature_key();
    let fragment = identifier_fragment(&member.param_type_names());
    let binding = registry.bind(&member.name, &key, &fragment, false);

    if binding.newly_bound {
        ctx.add_line(&format!(
            "public {} {};",
            callback_type_expression(member),
            binding.field_name
        ));
        ctx.blank_line();
    }

    if registry.claim_body(&key, &member.declaring_type) {
        compile_method_body(member, &binding.field_name, ctx);
    }
    Ok(())
}

fn compile_by_ref_method(
    member: &MemberDescriptor,
    ctx: &mut Context,
    registry: &mut SignatureRegistry,
) -> Result<(), CompileError> {
    let key = member.signature_key();
    let fragment = identifier_fragment(&member.param_type_names());
    // A bare-name field used elsewhere can never back a by-reference
    // member, so the suffix applies regardless of overload status.
    let binding = registry.bind(&member.name, &key, &fragment, true);

    if binding.newly_bound {
        ctx.add_line(&format!(
            "public delegate {} {}Delegate({});",
            member.return_type,
            binding.field_name,
            parameter_declarations(&member.parameters)
        ));
        ctx.add_line(&format!(
            "public {}Delegate {};",
            binding.field_name, binding.field_name
        ));
        ctx.blank_line();
    }

    if registry.claim_body(&key, &member.declaring_type) {
        compile_method_body(member, &binding.field_name, ctx);
    }
    Ok(())
}

/// Anonymous callback type for a method without by-reference parameters:
/// `Action` / `Action<..>` when void, `Func<.., R>` otherwise.
fn callback_type_expression(member: &MemberDescriptor) -> String {
    let mut type_args: Vec<&str> = member.param_type_names();

    if member.returns_void() {
        if type_args.is_empty() {
            "Action".to_string()
        } else {
            format!("Action<{}>", type_args.join(", "))
        }
    } else {
        type_args.push(member.return_type.as_str());
        format!("Func<{}>", type_args.join(", "))
    }
}

/// The declaring type's forwarding body, emitted once per occurrence even
/// when the backing field is shared with another declaring type.
fn compile_method_body(member: &MemberDescriptor, field_name: &str, ctx: &mut Context) {
    ctx.add_line(&format!(
        "{} {}.{}({})",
        member.return_type,
        member.declaring_type,
        member.name,
        parameter_declarations(&member.parameters)
    ));
    ctx.add_line("{");
    ctx.indent();

    // Out parameters are definitely assigned before anything can return
    for param in &member.parameters {
        if param.direction == ParamDirection::Out {
            ctx.add_line(&format!("{} = default({});", param.name, param.type_name));
        }
    }

    ctx.add_line(&format!("if (this.{} != null)", field_name));
    ctx.add_line("{");
    ctx.indent();
    let call = format!("this.{}({})", field_name, call_arguments(&member.parameters));
    if member.returns_void() {
        ctx.add_line(&format!("{};", call));
    } else {
        ctx.add_line(&format!("return {};", call));
    }
    ctx.dedent();
    ctx.add_line("}");

    if !member.returns_void() {
        ctx.add_line(&format!("return default({});", member.return_type));
    }

    ctx.dedent();
    ctx.add_line("}");
}

fn parameter_declarations(parameters: &[ParameterDescriptor]) -> String {
    parameters
        .iter()
        .map(|p| format!("{}{} {}", direction_modifier(p.direction), p.type_name, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn call_arguments(parameters: &[ParameterDescriptor]) -> String {
    parameters
        .iter()
        .map(|p| format!("{}{}", direction_modifier(p.direction), p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn direction_modifier(direction: ParamDirection) -> &'static str {
    match direction {
        ParamDirection::In => "",
        ParamDirection::Ref => "ref ",
        ParamDirection::Out => "out ",
    }
}

// ---- properties and indexers ----

fn compile_property(
    member: &MemberDescriptor,
    ctx: &mut Context,
    registry: &mut SignatureRegistry,
) -> Result<(), CompileError> {
    if !member.can_read && !member.can_write {
        // No capability is a valid state: nothing to back, nothing to forward
        debug!(member = %member.name, "Property supports no accessors, emitting nothing");
        return Ok(());
    }

    let key = member.signature_key();
    let binding = registry.bind(&member.name, &key, "", false);

    if binding.newly_bound {
        ctx.add_line(&format!(
            "public StubValue<{}> {} = new StubValue<{}>();",
            member.return_type, binding.field_name, member.return_type
        ));
        ctx.blank_line();
    }

    if !registry.claim_body(&key, &member.declaring_type) {
        return Ok(());
    }

    ctx.add_line(&format!(
        "{} {}.{}",
        member.return_type, member.declaring_type, member.name
    ));
    ctx.add_line("{");
    ctx.indent();
    if member.can_read {
        ctx.add_line(&format!("get {{ return this.{}.Get(); }}", binding.field_name));
    }
    if member.can_write {
        ctx.add_line(&format!("set {{ this.{}.Set(value); }}", binding.field_name));
    }
    ctx.dedent();
    ctx.add_line("}");
    Ok(())
}

fn compile_indexer(
    member: &MemberDescriptor,
    ctx: &mut Context,
    registry: &mut SignatureRegistry,
) -> Result<(), CompileError> {
    if !member.can_read && !member.can_write {
        debug!(member = %member.name, "Indexer supports no accessors, emitting nothing");
        return Ok(());
    }

    let key = member.signature_key();
    let fragment = identifier_fragment(&member.param_type_names());
    let binding = registry.bind(&member.name, &key, &fragment, false);

    let index_types = member.param_type_names().join(", ");
    let index_names: Vec<&str> = member.parameters.iter().map(|p| p.name.as_str()).collect();

    if binding.newly_bound {
        // Defaults are assigned at declaration, so the forwarding accessors
        // never need a null check.
        if member.can_read {
            ctx.add_line(&format!(
                "public Func<{}, {}> {}Get = ({}) => default({});",
                index_types,
                member.return_type,
                binding.field_name,
                index_names.join(", "),
                member.return_type
            ));
        }
        if member.can_write {
            ctx.add_line(&format!(
                "public Action<{}, {}> {}Set = ({}, value) => {{ }};",
                index_types,
                member.return_type,
                binding.field_name,
                index_names.join(", ")
            ));
        }
        ctx.blank_line();
    }

    if !registry.claim_body(&key, &member.declaring_type) {
        return Ok(());
    }

    ctx.add_line(&format!(
        "{} {}.this[{}]",
        member.return_type,
        member.declaring_type,
        parameter_declarations(&member.parameters)
    ));
    ctx.add_line("{");
    ctx.indent();
    if member.can_read {
        ctx.add_line(&format!(
            "get {{ return this.{}Get({}); }}",
            binding.field_name,
            index_names.join(", ")
        ));
    }
    if member.can_write {
        ctx.add_line(&format!(
            "set {{ this.{}Set({}, value); }}",
            binding.field_name,
            index_names.join(", ")
        ));
    }
    ctx.dedent();
    ctx.add_line("}");
    Ok(())
}

// ---- events ----

fn compile_event(
    member: &MemberDescriptor,
    ctx: &mut Context,
    registry: &mut SignatureRegistry,
) -> Result<(), CompileError> {
    let key = member.signature_key();
    let binding = registry.bind(&member.name, &key, "", false);

    let args_type = member
        .handler_args_type
        .clone()
        .unwrap_or_else(|| "EventArgs".to_string());
    // Whatever delegate shape the interface declares, registrations are
    // normalized to the canonical (sender, args) handler of the args type.
    let canonical_handler = format!("EventHandler<{}>", args_type);
    let declared_handler = member
        .handler_type
        .clone()
        .unwrap_or_else(|| canonical_handler.clone());

    if binding.newly_bound {
        ctx.add_line(&format!(
            "public StubEventHandlers<{}> {} = new StubEventHandlers<{}>();",
            args_type, binding.field_name, args_type
        ));
        ctx.blank_line();
    }

    if !registry.claim_body(&key, &member.declaring_type) {
        return Ok(());
    }

    ctx.add_line(&format!(
        "event {} {}.{}",
        declared_handler, member.declaring_type, member.name
    ));
    ctx.add_line("{");
    ctx.indent();
    ctx.add_line(&format!(
        "add {{ this.{}.Add(new {}(value)); }}",
        binding.field_name, canonical_handler
    ));
    ctx.add_line(&format!(
        "remove {{ this.{}.Remove(new {}(value)); }}",
        binding.field_name, canonical_handler
    ));
    ctx.dedent();
    ctx.add_line("}");
    Ok(())
}
