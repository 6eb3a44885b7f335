//! Static code tables compiled into the crate.
//!
//! Both tables are fixed by their governing documents (the NBIS coding guide
//! and the Ohio DOT county abbreviation list) and change on the order of
//! decades, so they ship as data rather than load-time configuration.

/// NBIS 3-digit state code -> state name, as published in the legacy coding
/// guide (including its truncated spellings).
pub(crate) const NBIS_STATE_CODES: &[(&str, &str)] = &[
    ("014", "Alabama"),
    ("020", "Alaska"),
    ("049", "Arizona"),
    ("056", "Arkansas"),
    ("069", "Californ"),
    ("088", "Colorado"),
    ("091", "Connecti"),
    ("103", "Delaware"),
    ("113", "District of Columbia"),
    ("124", "Florida"),
    ("134", "Georgia"),
    ("159", "Hawaii"),
    ("160", "Idaho"),
    ("175", "Illinois"),
    ("185", "Indiana"),
    ("197", "Iowa"),
    ("207", "Kansas"),
    ("214", "Kentucky"),
    ("226", "Louisiana"),
    ("231", "Maine"),
    ("243", "Maryland"),
    ("251", "Massachusetts"),
    ("265", "Michigan"),
    ("275", "Minnesota"),
    ("284", "Mississippi"),
    ("297", "Missouri"),
    ("308", "Montana"),
    ("317", "Nebraska"),
    ("329", "Nevada"),
    ("331", "New Hampshire"),
    ("342", "New Jersey"),
    ("356", "New Mexico"),
    ("362", "New York"),
    ("374", "North Carolina"),
    ("388", "North Dakota"),
    ("395", "Ohio"),
    ("406", "Oklahoma"),
    ("410", "Oregon"),
    ("423", "Pennsylvania"),
    ("441", "Rhode Island"),
    ("454", "South Carolina"),
    ("468", "South Dakota"),
    ("474", "Tennessee"),
    ("486", "Texas"),
    ("498", "Utah"),
    ("501", "Vermont"),
    ("513", "Virginia"),
    ("530", "Washington"),
    ("543", "West Virginia"),
    ("555", "Wisconsin"),
    ("568", "Wyoming"),
    ("721", "Puerto Rico"),
];

/// Ohio county name (upper case) -> 3-letter DOT abbreviation.
pub(crate) const OHIO_COUNTY_ABBREVS: &[(&str, &str)] = &[
    ("ADAMS", "ADA"),
    ("ALLEN", "ALL"),
    ("ASHLAND", "ASD"),
    ("ASHTABULA", "ATB"),
    ("ATHENS", "ATH"),
    ("AUGLAIZE", "AUG"),
    ("BELMONT", "BEL"),
    ("BROWN", "BRO"),
    ("BUTLER", "BUT"),
    ("CARROLL", "CAR"),
    ("CHAMPAIGN", "CHP"),
    ("CLARK", "CLA"),
    ("CLERMONT", "CLE"),
    ("CLINTON", "CLI"),
    ("COLUMBIANA", "COL"),
    ("COSHOCTON", "COS"),
    ("CRAWFORD", "CRA"),
    ("CUYAHOGA", "CUY"),
    ("DARKE", "DAR"),
    ("DEFIANCE", "DEF"),
    ("DELAWARE", "DEL"),
    ("ERIE", "ERI"),
    ("FAIRFIELD", "FAI"),
    ("FAYETTE", "FAY"),
    ("FRANKLIN", "FRA"),
    ("FULTON", "FUL"),
    ("GALLIA", "GAL"),
    ("GEAUGA", "GEA"),
    ("GREENE", "GRE"),
    ("GUERNSEY", "GUE"),
    ("HAMILTON", "HAM"),
    ("HANCOCK", "HAN"),
    ("HARDIN", "HAR"),
    ("HARRISON", "HAS"),
    ("HENRY", "HEN"),
    ("HIGHLAND", "HIG"),
    ("HOCKING", "HOC"),
    ("HOLMES", "HOL"),
    ("HURON", "HUR"),
    ("JACKSON", "JAC"),
    ("JEFFERSON", "JEF"),
    ("KNOX", "KNO"),
    ("LAKE", "LAK"),
    ("LAWRENCE", "LAW"),
    ("LICKING", "LIC"),
    ("LOGAN", "LOG"),
    ("LORAIN", "LOR"),
    ("LUCAS", "LUC"),
    ("MADISON", "MAD"),
    ("MAHONING", "MAH"),
    ("MARION", "MAR"),
    ("MEDINA", "MED"),
    ("MEIGS", "MEG"),
    ("MERCER", "MER"),
    ("MIAMI", "MIA"),
    ("MONROE", "MOE"),
    ("MONTGOMERY", "MOT"),
    ("MORGAN", "MRG"),
    ("MORROW", "MRW"),
    ("MUSKINGUM", "MUS"),
    ("NOBLE", "NOB"),
    ("OTTAWA", "OTT"),
    ("PAULDING", "PAU"),
    ("PERRY", "PER"),
    ("PICKAWAY", "PIC"),
    ("PIKE", "PIK"),
    ("PORTAGE", "POR"),
    ("PREBLE", "PRE"),
    ("PUTNAM", "PUT"),
    ("RICHLAND", "RIC"),
    ("ROSS", "ROS"),
    ("SANDUSKY", "SAN"),
    ("SCIOTO", "SCI"),
    ("SENECA", "SEN"),
    ("SHELBY", "SHE"),
    ("STARK", "STA"),
    ("SUMMIT", "SUM"),
    ("TRUMBULL", "TRU"),
    ("TUSCARAWAS", "TUS"),
    ("UNION", "UNI"),
    ("VAN WERT", "VAN"),
    ("VINTON", "VIN"),
    ("WARREN", "WAR"),
    ("WASHINGTON", "WAS"),
    ("WAYNE", "WAY"),
    ("WILLIAMS", "WIL"),
    ("WOOD", "WOO"),
    ("WYANDOT", "WYA"),
];
