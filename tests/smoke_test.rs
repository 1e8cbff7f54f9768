use toll_tax::{init, VehicleCatalog, VehicleCategory};

#[test]
fn catalog_smoke() {
    init();

    let mut catalog = VehicleCatalog::new();
    let id = catalog
        .register_vehicle("SM0KE1", "Sedan", "Toyota", 20000.0, VehicleCategory::Car)
        .id;
    catalog.pay_tax(id).expect("pay tax");

    let snapshot = catalog.snapshot();
    assert_eq!(snapshot.total_vehicles, 1);
    assert_eq!(snapshot.total_tax_collected, 2.0);
    assert!(catalog.pay_tax(id).is_err());
}
