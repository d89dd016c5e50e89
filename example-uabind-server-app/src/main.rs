use example_uabind_server_app::bind_sample_methods;
use tracing_subscriber::EnvFilter;
use uabind::{NodeId, Variant};
use uabind_server::{CallMethodRequest, ServerConfig, UaServer};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut server = UaServer::new(ServerConfig::default().with_application_uri("urn:uabind:example"));

    let objects = server.objects_folder();
    let machine = server
        .address_space_mut()
        .add_object(&objects, "Machine")
        .expect("Machine object");
    let methods = bind_sample_methods(&mut server, &machine).expect("sample methods");

    for (name, node_id) in [
        ("LengthPlusOffset", &methods.length_plus_offset),
        ("Add", &methods.add),
        ("Divide", &methods.divide),
        ("ShiftTimestamp", &methods.shift_timestamp),
    ] {
        if let Some(method) = server.address_space().node(node_id).and_then(|node| node.method()) {
            let inputs: Vec<_> = method
                .input_arguments()
                .iter()
                .map(|argument| format!("{}: {}", argument.name, argument.data_type))
                .collect();
            tracing::info!(
                method = name,
                node_id = %node_id,
                inputs = %inputs.join(", "),
                output = %method.output_argument().data_type,
                "bound method"
            );
        }
    }

    let session = NodeId::string(1, "example-session");
    let requests = [
        CallMethodRequest::new(
            machine.clone(),
            methods.length_plus_offset.clone(),
            vec![Variant::Int32(5), Variant::from("hello")],
        ),
        CallMethodRequest::new(
            machine.clone(),
            methods.length_plus_offset.clone(),
            vec![Variant::from("hello"), Variant::Int32(5)],
        ),
        CallMethodRequest::new(
            machine.clone(),
            methods.divide.clone(),
            vec![Variant::Double(1.0), Variant::Double(0.0)],
        ),
        CallMethodRequest::new(
            machine.clone(),
            methods.add.clone(),
            vec![Variant::Double(1.5)],
        ),
    ];

    for (request, result) in requests.iter().zip(server.call_all(&session, &requests)) {
        tracing::info!(
            method_id = %request.method_id,
            inputs = ?request.input_arguments,
            status = %result.status,
            outputs = ?result.output_arguments,
            "method call"
        );
    }
}
