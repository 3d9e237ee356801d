use polynav::*;

fn square_mesh() -> NavMesh {
    let square = vec![
        NavVec2::new(0.0, 0.0),
        NavVec2::new(1.0, 0.0),
        NavVec2::new(1.0, 1.0),
        NavVec2::new(0.0, 1.0),
    ];
    let polygon = NavPolygon::new(
        square.clone(),
        vec![],
        square,
        vec![(0, 1, 2).into(), (0, 2, 3).into()],
    )
    .unwrap();
    NavMesh::new(NavPolygonMap::new(vec![polygon]))
}

#[test]
fn mesh_queries_survive_json_roundtrip() {
    let mesh = square_mesh();
    let json = serde_json::to_string(&mesh).unwrap();
    let back: NavMesh = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id(), mesh.id());
    assert_eq!(back.areas().len(), mesh.areas().len());

    let from = NavVec2::new(0.5, 0.25);
    let to = NavVec2::new(0.25, 0.75);
    assert_eq!(
        back.find_path(from, to, NavGoalProjection::ClosestBoundary),
        mesh.find_path(from, to, NavGoalProjection::ClosestBoundary)
    );
}

#[test]
fn portal_and_connection_serialize_plainly() {
    let portal = NavPortal::new(NavVec2::new(1.0, 2.0), NavVec2::new(3.0, 4.0));
    let json = serde_json::to_string(&portal).unwrap();
    let back: NavPortal = serde_json::from_str(&json).unwrap();
    assert_eq!(back, portal);

    let connection = NavConnection(4, 2);
    let json = serde_json::to_string(&connection).unwrap();
    let back: NavConnection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, connection);
}
