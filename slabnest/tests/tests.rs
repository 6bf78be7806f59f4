#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use itertools::Itertools;
    use slabnest::entities::{Piece, Slab, SlabCatalog, UnitPiece, UnplacedReason, ZoneId};
    use slabnest::geometry::decompose_polygon;
    use slabnest::geometry::geo_traits::Shape;
    use slabnest::geometry::primitives::{Point, Rect, SPolygon};
    use slabnest::io::export::export_report;
    use slabnest::io::ext_repr::ExtOrder;
    use slabnest::io::import::Importer;
    use slabnest::opt::{RunOutcome, SlabSequencer, decompose, expand, pack_materials};
    use slabnest::util::PackingConfig;
    use slabnest::util::assertions;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn piece(id: &str, w: f64, h: f64, quantity: usize) -> Piece {
        Piece {
            id: id.to_string(),
            order_line_id: id.to_string(),
            description: String::new(),
            width: w,
            height: h,
            material_id: "granite".to_string(),
            quantity,
        }
    }

    fn l_slab(id: &str) -> Slab {
        let outline = SPolygon::new(vec![
            Point(0.0, 0.0),
            Point(300.0, 0.0),
            Point(300.0, 100.0),
            Point(200.0, 100.0),
            Point(200.0, 150.0),
            Point(0.0, 150.0),
        ])
        .unwrap();
        Slab::new(id, "granite", 300.0, 150.0).with_polygon(outline)
    }

    /// Deterministic mix of piece sizes and quantities
    fn piece_mix(n: usize) -> Vec<Piece> {
        (0..n)
            .map(|i| {
                let w = 20.0 + ((i * 37) % 160) as f64;
                let h = 15.0 + ((i * 53) % 120) as f64;
                piece(&format!("p{i}"), w, h, 1 + i % 3)
            })
            .collect()
    }

    fn slab_mix() -> Vec<Slab> {
        vec![
            Slab::new("s1", "granite", 300.0, 200.0),
            l_slab("s2"),
            Slab::new("s3", "granite", 250.0, 180.0),
            Slab::new("s4", "granite", 0.0, 180.0),
        ]
    }

    #[test]
    fn two_pieces_fit_on_a_single_slab() {
        init_logger();
        let config = PackingConfig::default();
        let slabs = vec![Slab::new("s1", "granite", 300.0, 200.0)];
        let units = expand(&[piece("a", 100.0, 100.0, 1), piece("b", 250.0, 80.0, 1)]);

        let run = SlabSequencer::new(&config).run(units, &slabs);
        assert_eq!(run.outcome(), RunOutcome::Complete);
        assert_eq!(run.n_placed(), 2);
        assert!(run.unplaced().is_empty());
        assert!(assertions::run_is_consistent(&run));

        let util = run.layouts[0].utilization();
        assert!(approx_eq!(f64, util.used_area, 30000.0, ulps = 2));
        assert!(approx_eq!(f64, util.waste_percentage, 50.0, epsilon = 1e-9));
    }

    #[test]
    fn oversized_piece_is_left_unplaced() {
        init_logger();
        let config = PackingConfig::default();
        let slabs = vec![Slab::new("s1", "granite", 300.0, 200.0)];
        let run = SlabSequencer::new(&config).run(expand(&[piece("a", 320.0, 50.0, 1)]), &slabs);

        assert_eq!(run.outcome(), RunOutcome::NeedsAdditionalSlab);
        assert!(run.layouts[0].is_empty());
        let unplaced = run.unplaced();
        assert_eq!(unplaced.len(), 1);
        assert_eq!(unplaced[0].piece.id, "a-1");
        assert_eq!(unplaced[0].reason, UnplacedReason::NoCapacity);
    }

    #[test]
    fn l_shaped_slab_fills_zone_a_before_zone_b() {
        init_logger();
        let config = PackingConfig::default();
        let slab = l_slab("l1");
        let zones = decompose(&slab, &config);
        assert_eq!(zones.iter().map(|z| z.id).collect_vec(), vec![ZoneId::A, ZoneId::B]);

        //three 100x100 pieces fill zone A (200x150) only partially: two side by side, the third does not fit above
        let units = expand(&[piece("sq", 100.0, 100.0, 3)]);
        let run = SlabSequencer::new(&config).run(units, &[slab]);
        assert_eq!(run.outcome(), RunOutcome::Complete);

        let placed = run.layouts[0]
            .placements
            .iter()
            .map(|p| (p.unit_piece_id.as_str(), p.zone_id, p.x, p.y))
            .collect_vec();
        assert_eq!(
            placed,
            vec![
                ("sq-1", ZoneId::A, 0.0, 0.0),
                ("sq-2", ZoneId::A, 100.0, 0.0),
                ("sq-3", ZoneId::B, 200.0, 0.0),
            ]
        );
        assert!(assertions::run_is_consistent(&run));
    }

    #[test]
    fn piece_too_large_for_the_first_slab_moves_to_the_second() {
        init_logger();
        let config = PackingConfig::default();
        let slabs = vec![
            Slab::new("s1", "granite", 200.0, 150.0),
            Slab::new("s2", "granite", 250.0, 200.0),
        ];
        let units = expand(&[piece("a", 180.0, 160.0, 1)]);

        //unplaced after the first slab alone
        let partial = SlabSequencer::new(&config).run(units.clone(), &slabs[..1]);
        assert_eq!(partial.outcome(), RunOutcome::NeedsAdditionalSlab);

        let run = SlabSequencer::new(&config).run(units, &slabs);
        assert_eq!(run.outcome(), RunOutcome::Complete);
        assert!(run.layouts[0].is_empty());
        assert_eq!(run.layouts[1].placements[0].slab_id, "s2");
    }

    #[test_case(10; "few pieces")]
    #[test_case(40; "many pieces")]
    #[test_case(120; "overflowing pieces")]
    fn packing_invariants_hold(n_pieces: usize) {
        init_logger();
        let config = PackingConfig::default();
        let pieces = piece_mix(n_pieces);
        let units = expand(&pieces);
        let n_units = units.len();

        let run = SlabSequencer::new(&config).run(units, &slab_mix());

        assert_eq!(run.n_placed() + run.n_unplaced(), n_units);
        assert!(assertions::conservation_holds(&run));
        for layout in &run.layouts {
            assert!(assertions::layout_is_overlap_free(layout));
            assert!(assertions::zones_within_slab(layout, config.bounds_tolerance));
            assert!(assertions::zones_do_not_overlap(&layout.zones, config.bounds_tolerance));
            assert!(assertions::placements_within_zones(layout, config.bounds_tolerance));
            assert!(assertions::rotations_are_valid(&layout.placements, &run.unit_pieces));
        }
        //the degenerate slab accepts nothing
        assert!(run.layout("s4").unwrap().is_empty());
    }

    #[test_case(true; "rotation allowed")]
    #[test_case(false; "rotation disallowed")]
    fn repeated_runs_are_identical(allow_rotation: bool) {
        let config = PackingConfig {
            allow_rotation,
            ..PackingConfig::default()
        };
        let units = expand(&piece_mix(60));
        let a = SlabSequencer::new(&config).run(units.clone(), &slab_mix());
        let b = SlabSequencer::new(&config).run(units, &slab_mix());
        assert_eq!(a.layouts, b.layouts);
        assert_eq!(a.remaining, b.remaining);
        if !allow_rotation {
            assert!(a.placements().all(|p| !p.is_rotated()));
        }
    }

    #[test]
    fn extending_run_slab_by_slab_equals_a_full_run() {
        init_logger();
        let config = PackingConfig::default();
        let units = expand(&piece_mix(50));
        let slabs = slab_mix();

        let mut incremental = SlabSequencer::new(&config).run(units.clone(), &slabs[..1]);
        for slab in &slabs[1..] {
            incremental.extend(slab.clone());
        }
        let full = SlabSequencer::new(&config).run(units, &slabs);

        assert_eq!(incremental.layouts, full.layouts);
        assert_eq!(incremental.remaining, full.remaining);
        assert_eq!(incremental.outcome(), full.outcome());
    }

    #[test_case(&[(0.0, 0.0), (300.0, 0.0), (300.0, 100.0), (200.0, 100.0), (200.0, 150.0), (0.0, 150.0)]; "top right notch")]
    #[test_case(&[(0.0, 0.0), (300.0, 0.0), (300.0, 150.0), (100.0, 150.0), (100.0, 50.0), (0.0, 50.0)]; "top left notch")]
    #[test_case(&[(0.0, 0.0), (200.0, 0.0), (200.0, 50.0), (300.0, 50.0), (300.0, 150.0), (0.0, 150.0)]; "bottom right notch")]
    #[test_case(&[(100.0, 0.0), (300.0, 0.0), (300.0, 150.0), (0.0, 150.0), (0.0, 50.0), (100.0, 50.0)]; "bottom left notch")]
    fn decomposition_covers_the_outline(points: &[(f64, f64)]) {
        let config = PackingConfig::default();
        let polygon = SPolygon::new(points.iter().map(|&p| p.into()).collect()).unwrap();
        let bounds = Rect::try_new(0.0, 0.0, 300.0, 150.0).unwrap();

        let (a, b) = decompose_polygon(bounds, &polygon, &config).unwrap();
        let error = (Rect::union_area(a, b) - polygon.area()).abs();
        assert!(error <= config.area_tolerance(polygon.area()));
        assert!(Rect::intersection(a, b).is_none());
        //zone A spans the full width or height of the outline
        assert!(a.width() == 300.0 || a.height() == 150.0);
    }

    #[test]
    fn order_json_end_to_end() {
        init_logger();
        let json = r#"{
            "order_lines": [
                {"id": "l1", "description": "island", "width": 2.5, "height": 0.8, "material_id": "granite"},
                {"id": "l2", "width": 120, "height": 100, "quantity": 3, "material_id": "granite"},
                {"id": "l3", "width": null, "height": 60, "material_id": "marble"}
            ],
            "slabs": [
                {"id": "g1", "material_id": "granite", "width": 3, "height": 2},
                {"id": "g0", "material_id": "granite", "width": 300, "height": 200, "status": "consumed"},
                {"id": "m1", "material_id": "marble", "width": 300, "height": 200}
            ]
        }"#;
        let ext_order: ExtOrder = serde_json::from_str(json).unwrap();
        let config = PackingConfig::default();
        let (pieces, catalog): (Vec<Piece>, SlabCatalog) =
            Importer::new(&config).import_order(&ext_order).unwrap();

        let runs = pack_materials(&pieces, &catalog, 1, &config);
        let report = export_report(&runs);

        //l1-1 opens the first shelf, l2-1 and l2-2 share the second, l2-3 is left over
        assert_eq!(report.n_unit_pieces, 5);
        assert_eq!(report.n_placed, 3);
        assert_eq!(report.n_unplaced, 2);

        let granite = &report.materials[0];
        assert_eq!(granite.layouts.len(), 1);
        assert_eq!(granite.layouts[0].slab_id, "g1");
        assert_eq!(granite.outcome, RunOutcome::NeedsAdditionalSlab);
        assert_eq!(granite.unplaced[0].unit_piece_id, "l2-3");

        let marble = &report.materials[1];
        assert_eq!(marble.outcome, RunOutcome::Complete);
        assert_eq!(marble.unplaced[0].reason, UnplacedReason::Degenerate);

        //the report serializes to the documented field names
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["materials"][0]["layouts"][0]["placements"][0]["zone_id"], "FULL");
        assert_eq!(value["materials"][1]["unplaced"][0]["reason"], "degenerate");
        assert_eq!(value["materials"][1]["unplaced"][0]["zone_id"], "NONE");
    }

    #[test]
    fn unit_pieces_carry_their_copy_index() {
        let units: Vec<UnitPiece> = expand(&[piece("a", 10.0, 10.0, 3), piece("b", 10.0, 10.0, 0)]);
        assert_eq!(units.iter().map(|u| u.id.as_str()).collect_vec(), vec!["a-1", "a-2", "a-3"]);
    }
}
