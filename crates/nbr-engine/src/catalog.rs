//! The standard transition checklist as one declarative table.
//!
//! Each row pairs a legacy inventory field (or fields) with its counterpart
//! attribute in the state asset system. Rows whose item has no counterpart
//! in one or both schemas are explicit `not recorded` / historic-only
//! entries, so the report always carries every checklist id.
//!
//! Registry order below is the canonical audit order; exports from
//! successive runs diff line-by-line against each other by id.

use crate::registry::{
    CheckDefinition, CheckRegistry, CodeTable, Comparator, Conversion, FieldRef, Hint,
    NumericParams, RegistryError, SubCheck, SubMode,
};

/// Feet of slack allowed after a meters -> feet conversion.
const LENGTH_TOL_FT: f64 = 1.0;

/// Miles of slack allowed after a kilometers -> miles conversion.
const DETOUR_TOL_MI: f64 = 1.0;

/// 50 ft of ground distance expressed in degrees of latitude.
const LAT_TOL_DEG: f64 = 1.35e-4;

/// 50 ft of ground distance expressed in degrees of longitude (mid-latitudes).
const LON_TOL_DEG: f64 = 2.95e-4;

// ---------------------------------------------------------------------------
// Row constructors
// ---------------------------------------------------------------------------

fn exact(id: &'static str, title: &'static str, h: &'static str, m: &'static str) -> CheckDefinition {
    CheckDefinition {
        id,
        title,
        comparator: Comparator::Exact {
            historic: FieldRef::Field(h),
            modern: FieldRef::Field(m),
            hint: None,
        },
    }
}

fn numeric_eq(
    id: &'static str,
    title: &'static str,
    h: &'static str,
    m: &'static str,
) -> CheckDefinition {
    CheckDefinition {
        id,
        title,
        comparator: Comparator::Numeric {
            historic: FieldRef::Field(h),
            modern: FieldRef::Field(m),
            params: NumericParams::equality(),
        },
    }
}

/// Meters on the historic side, feet on the modern side.
fn length_ft(
    id: &'static str,
    title: &'static str,
    h: &'static str,
    m: &'static str,
) -> CheckDefinition {
    CheckDefinition {
        id,
        title,
        comparator: Comparator::Numeric {
            historic: FieldRef::Field(h),
            modern: FieldRef::Field(m),
            params: NumericParams {
                convert: Some(Conversion::MetersToFeet),
                tolerance: LENGTH_TOL_FT,
                inclusive: false,
            },
        },
    }
}

/// Checklist item with no counterpart in either schema.
fn not_recorded(id: &'static str, title: &'static str) -> CheckDefinition {
    CheckDefinition {
        id,
        title,
        comparator: Comparator::Exact {
            historic: FieldRef::Unmapped,
            modern: FieldRef::Unmapped,
            hint: None,
        },
    }
}

/// Legacy field with no mapped modern attribute; retained for audit review.
fn historic_only(id: &'static str, title: &'static str, h: &'static str) -> CheckDefinition {
    CheckDefinition {
        id,
        title,
        comparator: Comparator::Exact {
            historic: FieldRef::Field(h),
            modern: FieldRef::Unmapped,
            hint: None,
        },
    }
}

fn composite(id: &'static str, title: &'static str, subs: Vec<SubCheck>) -> CheckDefinition {
    CheckDefinition {
        id,
        title,
        comparator: Comparator::Composite { subs },
    }
}

fn sub_exact(key: &'static str, h: &'static str, m: &'static str) -> SubCheck {
    SubCheck {
        key,
        historic: FieldRef::Field(h),
        modern: FieldRef::Field(m),
        mode: SubMode::Exact,
    }
}

fn sub_exact_unmapped(key: &'static str, h: &'static str) -> SubCheck {
    SubCheck {
        key,
        historic: FieldRef::Field(h),
        modern: FieldRef::Unmapped,
        mode: SubMode::Exact,
    }
}

fn sub_num(key: &'static str, h: &'static str, m: &'static str) -> SubCheck {
    SubCheck {
        key,
        historic: FieldRef::Field(h),
        modern: FieldRef::Field(m),
        mode: SubMode::Numeric(NumericParams::equality()),
    }
}

// ---------------------------------------------------------------------------
// The table
// ---------------------------------------------------------------------------

/// Build the standard checklist registry.
pub fn standard_registry() -> Result<CheckRegistry, RegistryError> {
    let defs = vec![
        // --- Identification ---
        exact("BID01", "Bridge Number", "STRUCTURE_NUMBER_008", "sfn"),
        not_recorded("BID02", "Bridge Name"),
        not_recorded("BID03", "Previous Bridge Number"),
        // --- Location ---
        CheckDefinition {
            id: "BL01",
            title: "State Code",
            comparator: Comparator::CodeTranslate {
                table: CodeTable::StateName {
                    code: FieldRef::Field("STATE_CODE_001"),
                },
                modern: FieldRef::Const("Ohio"),
            },
        },
        CheckDefinition {
            id: "BL02",
            title: "County Code",
            comparator: Comparator::CodeTranslate {
                table: CodeTable::CountyAbbrev {
                    county: FieldRef::Field("COUNTY_CODE_003"),
                    state: FieldRef::Field("STATE_CODE_001"),
                },
                modern: FieldRef::Field("county_cd"),
            },
        },
        CheckDefinition {
            id: "BL03",
            title: "Place Code",
            comparator: Comparator::Exact {
                historic: FieldRef::Field("PLACE_CODE_004"),
                modern: FieldRef::Field("fips_cd"),
                hint: Some(Hint::PlaceTownship),
            },
        },
        numeric_eq("BL04", "Highway Agency District", "HIGHWAY_DISTRICT_002", "district"),
        CheckDefinition {
            id: "BL05",
            title: "Latitude",
            comparator: Comparator::Numeric {
                historic: FieldRef::Field("LAT_016"),
                modern: FieldRef::Field("latitude_dd"),
                params: NumericParams {
                    convert: Some(Conversion::LatitudeDms),
                    tolerance: LAT_TOL_DEG,
                    inclusive: false,
                },
            },
        },
        CheckDefinition {
            id: "BL06",
            title: "Longitude",
            comparator: Comparator::Numeric {
                historic: FieldRef::Field("LONG_017"),
                modern: FieldRef::Field("longitude_dd"),
                params: NumericParams {
                    convert: Some(Conversion::LongitudeDms),
                    tolerance: LON_TOL_DEG,
                    inclusive: false,
                },
            },
        },
        exact("BL07", "Border Bridge Number", "OTHR_STATE_STRUC_NO_099", "brdr_brg_sfn"),
        exact(
            "BL08",
            "Border Bridge State or Country Code",
            "OTHER_STATE_CODE_098A",
            "brdr_brg_state",
        ),
        numeric_eq(
            "BL09",
            "Border Bridge Inspection Responsibility",
            "OTHER_STATE_PCNT_098B",
            "brdr_brg_pct_resp",
        ),
        CheckDefinition {
            id: "BL10",
            title: "Border Bridge Designated Lead State",
            comparator: Comparator::CodeTranslate {
                table: CodeTable::StateName {
                    code: FieldRef::Field("STATE_CODE_001"),
                },
                modern: FieldRef::Const("Ohio"),
            },
        },
        exact("BL11", "Bridge Location", "LOCATION_009", "str_loc"),
        not_recorded("BL12", "Metropolitan Planning Organization"),
        // --- Classification ---
        exact("BCL01", "Owner", "OWNER_022", "maintenance_authority"),
        exact(
            "BCL02",
            "Maintenance Responsibility",
            "MAINTENANCE_021",
            "maintenance_authority",
        ),
        historic_only("BCL03", "Federal or Tribal Land Access", "FEDERAL_LANDS_105"),
        numeric_eq("BCL04", "Historic Significance", "HISTORY_037", "hist_sgn_cd"),
        numeric_eq("BCL05", "Toll", "TOLL_020", "toll_cd"),
        not_recorded("BCL06", "Federal or Tribal Land Access"),
        // --- Spans ---
        composite(
            "BSP01",
            "Span Configuration Designation",
            vec![
                sub_num("main_material", "STRUCTURE_KIND_043A", "main_str_mtl_cd"),
                sub_num("main_type", "STRUCTURE_TYPE_043B", "main_str_type_cd"),
                sub_num("approach_material", "APPR_KIND_044A", "apprh_str_mtl_cd"),
                sub_num("approach_type", "APPR_TYPE_044B", "apprh_str_type_cd"),
            ],
        ),
        composite(
            "BSP02",
            "Number of Spans",
            vec![
                sub_num("main_spans", "MAIN_UNIT_SPANS_045", "main_spans"),
                sub_num("approach_spans", "APPR_SPANS_046", "apprh_spans"),
            ],
        ),
        not_recorded("BSP03", "Number of Beam Lines"),
        composite(
            "BSP04",
            "Span Material",
            vec![
                sub_num("main_material", "STRUCTURE_KIND_043A", "main_str_mtl_cd"),
                sub_num("approach_material", "APPR_KIND_044A", "apprh_str_mtl_cd"),
            ],
        ),
        composite(
            "BSP05",
            "Span Configuration Designation",
            vec![
                sub_num("main_material", "STRUCTURE_KIND_043A", "main_str_mtl_cd"),
                sub_num("main_type", "STRUCTURE_TYPE_043B", "main_str_type_cd"),
                sub_num("approach_material", "APPR_KIND_044A", "apprh_str_mtl_cd"),
                sub_num("approach_type", "APPR_TYPE_044B", "apprh_str_type_cd"),
            ],
        ),
        composite(
            "BSP06",
            "Span Type",
            vec![
                sub_num("main_type", "STRUCTURE_TYPE_043B", "main_str_type_cd"),
                sub_num("approach_type", "APPR_TYPE_044B", "apprh_str_type_cd"),
            ],
        ),
        not_recorded("BSP07", "Span Protective System"),
        not_recorded("BSP08", "Deck Interaction"),
        exact("BSP09", "Deck Material and Type", "DECK_STRUCTURE_TYPE_107", "deck_cd"),
        exact("BSP10", "Wearing Surface", "SURFACE_TYPE_108A", "wearing_surf_cd"),
        exact("BSP11", "Deck Protective System", "MEMBRANE_TYPE_108B", "deck_prot_extl_cd"),
        exact(
            "BSP12",
            "Deck Reinforcing Protective System",
            "DECK_PROTECTION_108C",
            "deck_prot_int_cd",
        ),
        not_recorded("BSP13", "Deck Stay-In-Place Forms"),
        // --- Substructure ---
        not_recorded("BSB01", "Substructure Configuration Designation"),
        not_recorded("BSB02", "Number of Substructure Units"),
        not_recorded("BSB03", "Substructure Material"),
        not_recorded("BSB04", "Substructure Configuration Designation"),
        not_recorded("BSB05", "Substructure Configuration Designation"),
        not_recorded("BSB06", "Substructure Configuration Designation"),
        not_recorded("BSB07", "Substructure Configuration Designation"),
        // --- Railings ---
        exact("BRH01", "Bridge Railings", "RAILINGS_036A", "survey_railing"),
        exact("BRH02", "Transitions", "TRANSITIONS_036B", "survey_transition"),
        // --- Geometry ---
        length_ft("BG01", "NBIS Bridge Length", "STRUCTURE_LEN_MT_049", "ovrl_str_len"),
        length_ft("BG02", "Total Bridge Length", "STRUCTURE_LEN_MT_049", "ovrl_str_len"),
        length_ft("BG03", "Maximum Span Length", "STRUCTURE_LEN_MT_049", "max_span_len"),
        length_ft("BG04", "Minimum Span Length", "MAX_SPAN_LEN_MT_048", "max_span_len"),
        length_ft("BG05", "Bridge Width Out-to-Out", "DECK_WIDTH_MT_052", "deck_wd"),
        length_ft("BG06", "Bridge Width Curb-to-Curb", "ROADWAY_WIDTH_MT_051", "brg_rdw_wd"),
        length_ft("BG07", "Left Curb or Sidewalk Width", "LEFT_CURB_MT_050A", "sidw_wd_l"),
        length_ft("BG08", "Right Curb or Sidewalk Width", "RIGHT_CURB_MT_050B", "sidw_wd_r"),
        length_ft("BG09", "Approach Roadway Width", "APPR_WIDTH_MT_032", "apprh_rdw_wd"),
        length_ft("BG10", "Bridge Median", "MEDIAN_CODE_033", "median_cd"),
        numeric_eq("BG11", "Degrees Skew", "DEGREES_SKEW_034", "skew_deg"),
        not_recorded("BG12", "Curved Bridge"),
        not_recorded("BG13", "Maximum Bridge Height"),
        not_recorded("BG14", "Sidehill Bridge"),
        not_recorded("BG15", "Irregular Deck Area"),
        not_recorded("BG16", "Calculated Deck Area"),
        // --- Features ---
        composite(
            "BF01",
            "Feature Type",
            vec![
                sub_num("on_feature", "SERVICE_ON_042A", "type_serv1_cd"),
                sub_num("under_feature", "SERVICE_UND_042B", "type_serv2_cd"),
            ],
        ),
        composite(
            "BF02",
            "Feature Location",
            vec![
                sub_num("on_feature", "SERVICE_ON_042A", "type_serv1_cd"),
                sub_num("under_feature", "SERVICE_UND_042B", "type_serv2_cd"),
            ],
        ),
        composite(
            "BF03",
            "Feature Name",
            vec![
                sub_exact("inventory_feature", "FEATURES_DESC_006A", "invent_feat"),
                sub_exact("facility_carried", "FACILITY_CARRIED_007", "str_loc_carried"),
            ],
        ),
        // --- Routes ---
        not_recorded("BRT01", "Route Designation"),
        composite(
            "BRT02",
            "Route Number",
            vec![
                sub_exact_unmapped("route_number", "ROUTE_NUMBER_005D"),
                sub_exact("direction", "DIRECTION_005E", "str_loc_carried"),
            ],
        ),
        numeric_eq("BRT03", "Route Direction", "TRAFFIC_DIRECTION_102", "dir_traffic_cd"),
        numeric_eq("BRT04", "Route Type", "ROUTE_PREFIX_005B", "invent_hwy_sys_cd"),
        numeric_eq("BRT05", "Service Type", "SERVICE_LEVEL_005C", "invent_hwy_dsgt_cd"),
        // --- Highway ---
        numeric_eq("BH01", "Functional Classification", "FUNCTIONAL_CLASS_026", "func_clas_cd"),
        numeric_eq("BH02", "Functional Classification", "FUNCTIONAL_CLASS_026", "func_clas_cd"),
        historic_only("BH03", "NHS Designation", "HIGHWAY_SYSTEM_104"),
        exact(
            "BH04",
            "National Highway Freight Network",
            "NATIONAL_NETWORK_110",
            "dsgt_natl_netw_sw",
        ),
        exact(
            "BH05",
            "Defense Highway Designation",
            "STRAHNET_HIGHWAY_100",
            "dfns_hwy_dsgt_sw",
        ),
        composite(
            "BH06",
            "LRS Route ID",
            vec![
                sub_exact_unmapped("lrs_route", "LRS_INV_ROUTE_013A"),
                sub_exact_unmapped("subroute", "SUBROUTE_NO_013B"),
            ],
        ),
        numeric_eq("BH07", "LRS Mile Point", "KILOPOINT_011", "func_clas_cd"),
        numeric_eq("BH08", "Lanes on Highway", "TRAFFIC_LANES_ON_028A", "lanes_on"),
        numeric_eq("BH09", "Annual Average Daily Traffic", "ADT_029", "invent_rte_adt"),
        numeric_eq(
            "BH10",
            "Annual Average Daily Truck Traffic",
            "PERCENT_ADT_TRUCK_109",
            "func_clas_cd",
        ),
        historic_only("BH11", "Year of Annual Average Daily Traffic", "YEAR_ADT_030"),
        numeric_eq(
            "BH12",
            "Highway Maximum Usable Vertical Clearance",
            "MIN_VERT_CLR_010",
            "func_clas_cd",
        ),
        composite(
            "BH13",
            "Highway Minimum Vertical Clearance",
            vec![
                sub_exact("reference", "VERT_CLR_UND_REF_054A", "minvrt_undclr_c"),
                sub_exact_unmapped("clearance", "VERT_CLR_UND_054B"),
            ],
        ),
        composite(
            "BH14",
            "Highway Minimum Horizontal Clearance, Left",
            vec![
                sub_exact("reference", "LAT_UND_REF_055A", "minvrt_undclr_c"),
                sub_exact_unmapped("clearance", "LEFT_LAT_UND_MT_056"),
            ],
        ),
        composite(
            "BH15",
            "Highway Minimum Horizontal Clearance, Right",
            vec![
                sub_exact_unmapped("reference", "LAT_UND_REF_055A"),
                sub_exact_unmapped("clearance", "LAT_UND_MT_055B"),
            ],
        ),
        numeric_eq(
            "BH16",
            "Highway Maximum Usable Surface Width",
            "HORR_CLR_MT_047",
            "min_horiz_clr_c",
        ),
        CheckDefinition {
            id: "BH17",
            title: "Bypass Detour Length",
            comparator: Comparator::Numeric {
                historic: FieldRef::Field("DETOUR_KILOS_019"),
                modern: FieldRef::Field("bypass_len"),
                params: NumericParams {
                    convert: Some(Conversion::KilometersToMiles),
                    tolerance: DETOUR_TOL_MI,
                    inclusive: false,
                },
            },
        },
        not_recorded("BH18", "Crossing Bridge Number"),
        // --- Railroad ---
        not_recorded("BRR01", "Railroad Service Type"),
        composite(
            "BRR02",
            "Railroad Minimum Vertical Clearance",
            vec![
                sub_exact_unmapped("reference", "VERT_CLR_UND_REF_054A"),
                sub_exact_unmapped("clearance", "VERT_CLR_UND_054B"),
            ],
        ),
        composite(
            "BRR03",
            "Railroad Minimum Horizontal Offset",
            vec![
                sub_exact_unmapped("reference", "VERT_CLR_UND_REF_054A"),
                sub_exact_unmapped("clearance", "VERT_CLR_UND_054B"),
            ],
        ),
        // --- Navigation ---
        exact("BN01", "Navigable Waterway", "NAVIGATION_038", "nav_control_sw"),
        composite(
            "BN02",
            "Navigation Minimum Vertical Clearance",
            vec![
                sub_num("vertical_clearance", "NAV_VERT_CLR_MT_039", "nav_vrt_clr"),
                sub_num("structure_type", "STRUCTURE_TYPE_043B", "main_str_type_cd"),
                sub_num("minimum_clearance", "MIN_NAV_CLR_MT_116", "min_nav_vrt_clr"),
            ],
        ),
        composite(
            "BN03",
            "Movable Bridge Maximum Navigation Vertical Clearance",
            vec![
                sub_num("vertical_clearance", "NAV_VERT_CLR_MT_039", "nav_vrt_clr"),
                sub_num("structure_type", "STRUCTURE_TYPE_043B", "main_str_type_cd"),
                sub_exact_unmapped("minimum_clearance", "MIN_NAV_CLR_MT_116"),
            ],
        ),
        numeric_eq("BN04", "Navigation Channel Width", "NAV_HORR_CLR_MT_040", "nav_horiz_clr"),
        not_recorded("BN05", "Navigation Horizontal Clearance"),
        exact(
            "BN06",
            "Substructure Navigation Protection",
            "PIER_PROTECTION_111",
            "subs_fenders",
        ),
        // --- Load rating ---
        numeric_eq("BLR01", "Design Load", "DESIGN_LOAD_031", "design_load_cd"),
        not_recorded("BLR02", "Design Method"),
        not_recorded("BLR03", "Load Rating Date"),
        historic_only("BLR04", "Operating Rating Method", "OPR_RATING_METH_063"),
        numeric_eq(
            "BLR05",
            "Inventory Load Rating Factor",
            "INVENTORY_RATING_066",
            "rat_inv_load_fact",
        ),
        numeric_eq(
            "BLR06",
            "Operating Load Rating Factor",
            "OPERATING_RATING_064",
            "rat_opr_load_fact",
        ),
        not_recorded("BLR07", "Controlling Legal Load Rating Factor"),
        not_recorded("BLR08", "Routine Permit Loads"),
        // --- Posting ---
        exact("BPS01", "Load Posting Status", "OPEN_CLOSED_POSTED_041", "gen_opr_status"),
        not_recorded("BPS02", "Posting Status Change Date"),
        // --- Evaluation postings ---
        not_recorded("BEP01", "Legal Load Configuration"),
        not_recorded("BEP02", "Legal Load Rating Factor"),
        not_recorded("BEP03", "Posting Type"),
        not_recorded("BEP04", "Posting Value"),
        // --- Inspection requirements ---
        exact("BIR01", "NSTM Inspection Required", "FRACTURE_092A", "frac_crit_insp_sw"),
        not_recorded("BIR02", "Fatigue Details"),
        exact(
            "BIR03",
            "Underwater Inspection Required",
            "UNDWATER_LOOK_SEE_092B",
            "dive_insp_sw",
        ),
        not_recorded("BIR04", "NSTM Inspection Required"),
        // --- Inspection events ---
        composite(
            "BIE01",
            "Inspection Type",
            vec![
                sub_exact("1", "DATE_OF_INSPECT_090", "insp_dt"),
                sub_exact("2", "FRACTURE_092A", "frac_crit_insp_sw"),
                sub_exact("3", "FRACTURE_LAST_DATE_093A", "frac_crit_insp_dt"),
                sub_exact("4", "UNDWATER_LOOK_SEE_092B", "dive_insp_sw"),
                sub_exact("5", "UNDWATER_LAST_DATE_093B", "dive_insp_dt"),
                sub_exact("6", "SPEC_INSPECT_092C", "spcl_insp_sw"),
                sub_exact("7", "SPEC_LAST_DATE_093C", "spcl_insp_dt"),
            ],
        ),
        composite(
            "BIE02",
            "Inspection Begin Date",
            vec![
                sub_exact("1", "DATE_OF_INSPECT_090", "insp_dt"),
                sub_exact("2", "FRACTURE_LAST_DATE_093A", "frac_crit_insp_sw"),
                sub_exact("3", "UNDWATER_LAST_DATE_093B", "frac_crit_insp_dt"),
                sub_exact("4", "UNDWATER_LOOK_SEE_092B", "dive_insp_sw"),
                sub_exact("5", "UNDWATER_LAST_DATE_093B", "dive_insp_dt"),
                sub_exact("6", "SPEC_INSPECT_092C", "spcl_insp_sw"),
                sub_exact("7", "SPEC_LAST_DATE_093C", "spcl_insp_dt"),
            ],
        ),
        not_recorded("BIE03", "Inspection Completion Date"),
        not_recorded("BIE04", "Nationally Certified Bridge Inspector"),
        composite(
            "BIE05",
            "Inspection Interval",
            vec![
                sub_num("interval", "INSPECT_FREQ_MONTHS_091", "dsgt_insp_freq"),
                sub_exact("nstm_required", "FRACTURE_092A", "frac_crit_insp_sw"),
                sub_exact("underwater_required", "UNDWATER_LOOK_SEE_092B", "frac_crit_insp_dt"),
                sub_exact("special_required", "SPEC_INSPECT_092C", "frac_crit_insp_dt"),
            ],
        ),
        not_recorded("BIE06", "Inspection Due Date"),
        not_recorded("BIE07", "Risk-Based Inspection Interval Method"),
        not_recorded("BIE08", "Inspection Quality Control Date"),
        not_recorded("BIE09", "Inspection Quality Assurance Date"),
        not_recorded("BIE10", "Inspection Completion Date"),
        not_recorded("BIE11", "Inspection Note"),
        not_recorded("BIE12", "Inspection Equipment"),
        // --- Condition ratings ---
        exact("BC01", "Deck Condition Rating", "DECK_COND_058", "deck_summary"),
        exact(
            "BC02",
            "Superstructure Condition Rating",
            "SUPERSTRUCTURE_COND_059",
            "sups_summary",
        ),
        exact(
            "BC03",
            "Substructure Condition Rating",
            "SUBSTRUCTURE_COND_060",
            "subs_summary",
        ),
        exact("BC04", "Culvert Condition Rating", "CULVERT_COND_062", "culvert_summary"),
        exact("BC05", "Bridge Railing Condition Rating", "RAILINGS_036A", "survey_railing"),
        exact(
            "BC06",
            "Transitions Condition Rating",
            "TRANSITIONS_036B",
            "survey_transition",
        ),
        not_recorded("BC07", "Bridge Bearings Condition Rating"),
        not_recorded("BC08", "Bridge Joints Condition Rating"),
        exact("BC09", "Channel Condition Rating", "CHANNEL_COND_061", "chan_summary"),
        not_recorded("BC10", "Channel Protection Condition Rating"),
        exact("BC11", "Scour Condition Rating", "SCOUR_CRITICAL_113", "scour_crit_cd"),
        historic_only("BC12", "Bridge Condition Classification", "BRIDGE_CONDITION"),
        historic_only("BC13", "Lowest Condition Rating Code", "LOWEST_RATING"),
        not_recorded("BC14", "Underwater Inspection Condition"),
        not_recorded("BC15", "Underwater Inspection Condition"),
        // --- Appraisal ---
        exact("BAP01", "Approach Roadway Alignment", "APPR_ROAD_EVAL_072", "apprh_algn_cd"),
        exact("BAP02", "Waterway Adequacy", "WATERWAY_EVAL_071", "ww_adequacy_cd"),
        exact("BAP03", "Scour Vulnerability", "SCOUR_CRITICAL_113", "scour_crit_cd"),
        not_recorded("BAP04", "Scour Plan of Action"),
        not_recorded("BAP05", "Seismic Vulnerability"),
        // --- Work history ---
        historic_only("BW01", "Year Built", "YEAR_BUILT_027"),
        exact("BW02", "Year Work Performed", "YEAR_RECONSTRUCTED_106", "maj_recon_dt"),
        not_recorded("BW03", "Work Performed By"),
    ];

    CheckRegistry::new(defs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_builds_and_has_stable_shape() {
        let reg = standard_registry().unwrap();
        assert_eq!(reg.len(), 147);

        let ids: Vec<_> = reg.iter().map(|d| d.id).collect();
        assert_eq!(ids[0], "BID01");
        assert_eq!(*ids.last().unwrap(), "BW03");

        // Spot-check order inside a group.
        let bl05 = ids.iter().position(|id| *id == "BL05").unwrap();
        let bl06 = ids.iter().position(|id| *id == "BL06").unwrap();
        assert_eq!(bl06, bl05 + 1);
    }

    #[test]
    fn every_id_is_unique_by_construction() {
        // CheckRegistry::new already enforces this; building is the assertion.
        assert!(standard_registry().is_ok());
    }

    #[test]
    fn geometry_checks_convert_meters_to_feet() {
        let reg = standard_registry().unwrap();
        let bg01 = reg.get("BG01").unwrap();
        match &bg01.comparator {
            Comparator::Numeric { params, .. } => {
                assert_eq!(params.convert, Some(Conversion::MetersToFeet));
                assert_eq!(params.tolerance, LENGTH_TOL_FT);
                assert!(!params.inclusive);
            }
            other => panic!("BG01 should be numeric, got {other:?}"),
        }
    }

    #[test]
    fn coordinate_checks_use_dms_decode() {
        let reg = standard_registry().unwrap();
        match &reg.get("BL05").unwrap().comparator {
            Comparator::Numeric { params, .. } => {
                assert_eq!(params.convert, Some(Conversion::LatitudeDms));
            }
            _ => panic!("BL05 should be numeric"),
        }
        match &reg.get("BL06").unwrap().comparator {
            Comparator::Numeric { params, .. } => {
                assert_eq!(params.convert, Some(Conversion::LongitudeDms));
            }
            _ => panic!("BL06 should be numeric"),
        }
    }

    #[test]
    fn county_check_reads_both_code_fields() {
        let reg = standard_registry().unwrap();
        let bl02 = reg.get("BL02").unwrap();
        assert_eq!(bl02.historic_fields(), vec!["COUNTY_CODE_003", "STATE_CODE_001"]);
        assert_eq!(bl02.modern_fields(), vec!["county_cd"]);
    }

    #[test]
    fn placeholder_checks_read_no_fields() {
        let reg = standard_registry().unwrap();
        let bid02 = reg.get("BID02").unwrap();
        assert!(bid02.historic_fields().is_empty());
        assert!(bid02.modern_fields().is_empty());
    }

    #[test]
    fn kind_labels_cover_all_families() {
        let reg = standard_registry().unwrap();
        assert_eq!(reg.get("BID01").unwrap().kind(), "exact");
        assert_eq!(reg.get("BG01").unwrap().kind(), "numeric");
        assert_eq!(reg.get("BL02").unwrap().kind(), "code-translate");
        assert_eq!(reg.get("BSP01").unwrap().kind(), "composite");
    }
}
