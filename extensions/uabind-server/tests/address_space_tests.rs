use uabind::constants::{
    NS0_ID_BASE_OBJECT_TYPE, NS0_ID_FOLDER_TYPE, NS0_ID_HAS_COMPONENT, NS0_ID_ORGANIZES,
};
use uabind::{DataTypeId, LocalizedText, NodeId, QualifiedName, StatusCode};
use uabind_method::error::BindError;
use uabind_server::error::ServerError;
use uabind_server::{AddressSpaceInterface, InMemoryAddressSpace, NodeClass, ServerConfig};

fn address_space() -> InMemoryAddressSpace {
    InMemoryAddressSpace::new(&ServerConfig::default().with_first_node_id(1_000))
}

#[test]
fn test_starts_with_objects_folder() {
    let address_space = address_space();
    let objects = address_space
        .node(&InMemoryAddressSpace::objects_folder_id())
        .unwrap();

    assert_eq!(address_space.len(), 1);
    assert_eq!(objects.node_id(), &NodeId::ns0(85));
    assert_eq!(objects.node_class(), NodeClass::Object);
    assert_eq!(objects.browse_name(), &QualifiedName::new(0, "Objects"));
    assert_eq!(objects.type_definition(), Some(&NodeId::ns0(NS0_ID_FOLDER_TYPE)));
    assert!(objects.parent_id().is_none());
}

#[test]
fn test_objects_and_folders_get_sequential_ids() {
    let mut address_space = address_space();
    let objects = InMemoryAddressSpace::objects_folder_id();

    let plant = address_space.add_folder(&objects, "Plant").unwrap();
    let machine = address_space.add_object(&plant, "Machine").unwrap();

    assert_eq!(plant, NodeId::numeric(1, 1_000));
    assert_eq!(machine, NodeId::numeric(1, 1_001));

    let plant_node = address_space.node(&plant).unwrap();
    assert_eq!(plant_node.reference_type(), Some(&NodeId::ns0(NS0_ID_ORGANIZES)));
    assert_eq!(plant_node.children(), [machine.clone()]);

    let machine_node = address_space.node(&machine).unwrap();
    assert_eq!(machine_node.parent_id(), Some(&plant));
    assert_eq!(
        machine_node.reference_type(),
        Some(&NodeId::ns0(NS0_ID_HAS_COMPONENT))
    );
    assert_eq!(
        machine_node.type_definition(),
        Some(&NodeId::ns0(NS0_ID_BASE_OBJECT_TYPE))
    );
    assert_eq!(machine_node.display_name().text, "Machine");
}

#[test]
fn test_add_object_validates_parent_and_name() {
    let mut address_space = address_space();
    let objects = InMemoryAddressSpace::objects_folder_id();
    address_space.add_object(&objects, "Machine").unwrap();

    let duplicate = address_space.add_object(&objects, "Machine").unwrap_err();
    assert_eq!(duplicate.status, StatusCode::BadBrowseNameDuplicated);

    let orphan = address_space
        .add_object(&NodeId::numeric(1, 9), "Pump")
        .unwrap_err();
    assert_eq!(orphan.status, StatusCode::BadParentNodeIdInvalid);

    assert_eq!(address_space.len(), 2);
}

#[test]
fn test_method_node_attributes() {
    let mut address_space = address_space();
    let objects = InMemoryAddressSpace::objects_folder_id();
    let machine = address_space.add_object(&objects, "Machine").unwrap();

    let method = address_space
        .add_method(&machine, "Scale", |value: f32, factor: f32| value * factor)
        .unwrap();

    let node = address_space.node(&method).unwrap();
    assert_eq!(node.node_class(), NodeClass::Method);
    assert_eq!(node.browse_name(), &QualifiedName::new(1, "Scale"));
    assert_eq!(node.display_name(), &LocalizedText::new("en-US", "Scale"));
    assert_eq!(node.description().text, "Scale");
    assert_eq!(node.parent_id(), Some(&machine));
    assert_eq!(node.reference_type(), Some(&NodeId::ns0(NS0_ID_HAS_COMPONENT)));
    assert!(node.type_definition().is_none());

    let method_node = node.method().unwrap();
    assert!(method_node.executable());
    assert!(method_node.user_executable());
    assert_eq!(method_node.output_argument().data_type, DataTypeId::Float);
    assert_eq!(method_node.input_arguments().len(), 2);
    assert_eq!(method_node.input_arguments()[0].name, "Arg0");
    assert_eq!(method_node.input_arguments()[1].name, "Arg1");

    let (handle, binding) = address_space.method_table().find_by_node(&method).unwrap();
    assert_eq!(handle, method_node.context());
    assert_eq!(method_node.input_arguments(), binding.inputs());
    assert_eq!(method_node.output_argument(), binding.output());
}

#[test]
fn test_attributes_use_configured_locale() {
    let mut address_space =
        InMemoryAddressSpace::new(&ServerConfig::default().with_locale("fr-FR"));
    let objects = InMemoryAddressSpace::objects_folder_id();

    let method = address_space
        .add_method(&objects, "Reset", || true)
        .unwrap();

    let node = address_space.node(&method).unwrap();
    assert_eq!(node.display_name().locale, "fr-FR");
    assert_eq!(node.description().locale, "fr-FR");
}

#[test]
fn test_method_registration_failures() {
    let mut address_space = address_space();
    let objects = InMemoryAddressSpace::objects_folder_id();
    let method = address_space.add_method(&objects, "Ping", || true).unwrap();

    let duplicate = address_space
        .add_method(&objects, "Ping", || false)
        .unwrap_err();
    assert!(matches!(
        duplicate,
        BindError::Registration(ref err) if err.status == StatusCode::BadBrowseNameDuplicated
    ));

    let under_method = address_space
        .add_method(&method, "Nested", || true)
        .unwrap_err();
    assert!(matches!(
        under_method,
        BindError::Registration(ref err) if err.status == StatusCode::BadParentNodeIdInvalid
    ));

    let unsupported = address_space
        .add_method(&objects, "Nothing", || ())
        .unwrap_err();
    assert!(matches!(unsupported, BindError::UnsupportedType { .. }));

    assert_eq!(address_space.method_table().len(), 1);
    assert_eq!(address_space.len(), 2);
}

#[test]
fn test_delete_node_drops_subtree_and_bindings() {
    let mut address_space = address_space();
    let objects = InMemoryAddressSpace::objects_folder_id();
    let machine = address_space.add_object(&objects, "Machine").unwrap();
    let start = address_space.add_method(&machine, "Start", || true).unwrap();
    let stop = address_space.add_method(&machine, "Stop", || false).unwrap();
    let keep = address_space.add_method(&objects, "Status", || 1u8).unwrap();
    assert_eq!(address_space.method_table().len(), 3);

    address_space.delete_node(&machine).unwrap();

    assert!(!address_space.contains(&machine));
    assert!(!address_space.contains(&start));
    assert!(!address_space.contains(&stop));
    assert!(address_space.contains(&keep));
    assert_eq!(address_space.method_table().len(), 1);
    assert!(address_space.method_table().find_by_node(&start).is_none());
    assert!(address_space.method_table().find_by_node(&keep).is_some());

    let objects_node = address_space.node(&objects).unwrap();
    assert_eq!(objects_node.children(), [keep]);

    // The freed browse name can be bound again.
    address_space.add_object(&objects, "Machine").unwrap();
}

#[test]
fn test_delete_node_errors() {
    let mut address_space = address_space();

    assert!(matches!(
        address_space.delete_node(&InMemoryAddressSpace::objects_folder_id()),
        Err(ServerError::ProtectedNode(_))
    ));
    assert!(matches!(
        address_space.delete_node(&NodeId::numeric(1, 12)),
        Err(ServerError::NodeNotFound(_))
    ));
}

#[test]
fn test_node_attributes_are_writable() {
    let mut address_space = address_space();
    let objects = InMemoryAddressSpace::objects_folder_id();
    let machine = address_space.add_object(&objects, "Machine").unwrap();

    let node = address_space.node_mut(&machine).unwrap();
    node.set_display_name(LocalizedText::new("en-US", "Press 4"));
    node.set_description(LocalizedText::new("en-US", "Hydraulic press"));
    node.set_write_mask(0x40);

    let node = address_space.node(&machine).unwrap();
    assert_eq!(node.display_name().text, "Press 4");
    assert_eq!(node.description().text, "Hydraulic press");
    assert_eq!(node.write_mask(), 0x40);
}

#[test]
fn test_find_child_by_browse_name() {
    let mut address_space = address_space();
    let objects = InMemoryAddressSpace::objects_folder_id();
    let machine = address_space.add_object(&objects, "Machine").unwrap();

    let found = address_space
        .find_child(&objects, &QualifiedName::new(1, "Machine"))
        .unwrap();
    assert_eq!(found.node_id(), &machine);
    assert!(
        address_space
            .find_child(&objects, &QualifiedName::new(2, "Machine"))
            .is_none()
    );
}

#[test]
fn test_method_flags_toggle_without_touching_descriptors() {
    let mut address_space = address_space();
    let objects = InMemoryAddressSpace::objects_folder_id();
    let method = address_space
        .add_method(&objects, "Negate", |value: i32| -value)
        .unwrap();

    let method_node = address_space
        .node_mut(&method)
        .and_then(|node| node.method_mut())
        .unwrap();
    method_node.set_executable(false);
    assert!(!method_node.is_callable());
    method_node.set_executable(true);
    method_node.set_user_executable(false);
    assert!(!method_node.is_callable());
    method_node.set_user_executable(true);
    assert!(method_node.is_callable());

    let method_node = address_space.node(&method).unwrap().method().unwrap();
    assert_eq!(method_node.input_arguments()[0].data_type, DataTypeId::Int32);
    assert_eq!(method_node.output_argument().data_type, DataTypeId::Int32);
}

#[test]
fn test_node_ids_run_out_without_overwriting() {
    let mut address_space =
        InMemoryAddressSpace::new(&ServerConfig::default().with_first_node_id(u32::MAX - 1));
    let objects = InMemoryAddressSpace::objects_folder_id();

    let first = address_space.add_object(&objects, "First").unwrap();
    let last = address_space.add_object(&objects, "Last").unwrap();
    assert_eq!(first, NodeId::numeric(1, u32::MAX - 1));
    assert_eq!(last, NodeId::numeric(1, u32::MAX));

    let exhausted = address_space.add_object(&objects, "Overflow").unwrap_err();
    assert_eq!(exhausted.status, StatusCode::BadOutOfRange);

    let method = address_space
        .add_method(&objects, "Ping", || true)
        .unwrap_err();
    assert!(matches!(
        method,
        BindError::Registration(ref err) if err.status == StatusCode::BadOutOfRange
    ));

    assert_eq!(address_space.len(), 3);
    assert!(address_space.method_table().is_empty());
    assert_eq!(address_space.node(&first).unwrap().browse_name().name, "First");
    assert!(!address_space.contains(&NodeId::numeric(1, 0)));
}
