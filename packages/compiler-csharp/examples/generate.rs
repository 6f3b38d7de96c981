use anyhow::Result;
use understudy_compiler_csharp::{compile_stub_type, CompileOptions};
use understudy_model::{InterfaceDescriptor, MemberDescriptor, ParameterDescriptor};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let interface = InterfaceDescriptor::new("Acme.Reporting.IReportStore", "IReportStore")
        .with_members(vec![
            MemberDescriptor::property("Count", "Acme.Reporting.IReportStore", "Int32", true, false),
            MemberDescriptor::method(
                "Save",
                "Acme.Reporting.IReportStore",
                "void",
                vec![
                    ParameterDescriptor::input("String", "name"),
                    ParameterDescriptor::input("Byte[]", "payload"),
                ],
            ),
            MemberDescriptor::method(
                "Save",
                "Acme.Reporting.IReportStore",
                "void",
                vec![ParameterDescriptor::input("String", "name")],
            ),
            MemberDescriptor::method(
                "TryLoad",
                "Acme.Reporting.IReportStore",
                "Boolean",
                vec![
                    ParameterDescriptor::input("String", "name"),
                    ParameterDescriptor::out("Byte[]", "payload"),
                ],
            ),
            MemberDescriptor::indexer(
                "Item",
                "Acme.Reporting.IReportStore",
                "String",
                vec![ParameterDescriptor::input("Int32", "index")],
                true,
                true,
            ),
            MemberDescriptor::event(
                "StoreChanged",
                "Acme.Reporting.IReportStore",
                "EventHandler<StoreChangedEventArgs>",
                "StoreChangedEventArgs",
            ),
        ]);

    println!("Compiling stub for {}...\n", interface.qualified_name);

    let source = compile_stub_type(&interface, CompileOptions::default())?;

    println!("{}", "=".repeat(80));
    println!("{}", source);
    println!("{}", "=".repeat(80));

    Ok(())
}
