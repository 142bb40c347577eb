//! Fixed 256-entry gear-hash mixing table.
//!
//! Generated once with a SplitMix64 generator seeded from a constant and
//! frozen here. Cross-implementation bit-compatibility of the content-
//! defined split points is not required (only determinism within one
//! implementation matters), so any fixed, well-mixed table works; this one
//! is this crate's own.

/// 256 64-bit mixing constants indexed by input byte value. Used by
/// [`crate::gear::RollingHashState::feed`] as the mixing table.
pub static GEAR_TAB: [u64; 256] = [
    0x444C2AC6264108D7, 0x4A02CE7F30C89589, 0xE1C3A19CDDF8F6E5, 0x28454F7A026FAF39,
    0x0559110BC67ECBFF, 0x56ED18387DBE071D, 0x3B24146CAB662822, 0xAD99236F3AF08590,
    0xF0A46CB61502A3CE, 0xB9CEF04646673D99, 0x550D068D7A19A77A, 0x5B9D28E96434A639,
    0x90996DFFB03339EF, 0x760AFB60B6F4B51A, 0xC8607DE380167074, 0x2D8DD12F3420E1CB,
    0x0E9EBFECA3639870, 0x1092302B8F81C079, 0xAE490CF325B0125F, 0x80810E1CBABEDD0C,
    0x5D3E13932FCD08D2, 0xFC3B0649B2F78883, 0xBA52EE04EC8083E9, 0xFCAABF180732092F,
    0x414391195CEE327A, 0x3D2CAD73CC9A94F5, 0xDBA83F98D82DEB05, 0x16E018CC28C09B25,
    0xC57FC59B0AB0A343, 0x8A4544D63CE30DEF, 0x6CF38AF7470AACFE, 0xFE84A1B1A2BB0940,
    0xBD2644BFF2C09BB3, 0x485EEB4E2A0AD12A, 0x1E926243F488F146, 0x8CB04F5254785749,
    0x7236D136A3542A07, 0x78DE7C8603229303, 0x010C446C8746A351, 0x9F2E7976905418AE,
    0x5A7843E0FBCAA367, 0xD6DF584198911A96, 0x34F35605287F1C79, 0xCAFCEEB4995EFC34,
    0x84FFFC1885A2AC59, 0xD3E93E847CB01C77, 0x651E94E7B20B09C3, 0xFB15EC5503EE78C4,
    0xB69ADD5E18E41DBB, 0x214CD8D186A71CEF, 0x6EB9C46418A0C69B, 0x941040859296F7F3,
    0xE51F218559BBDF3B, 0xC3E47148987B41C1, 0x6BB5E7329E40500B, 0xE45A463B46CBDA17,
    0xE8CF6B2954D5B42D, 0x88EE4E536E329A8B, 0x7F92D1FC78642128, 0x0F204F1A8BC0F25F,
    0x28D91E165DC32618, 0xD05C42B9D303E672, 0x2D070F553B0D3ABC, 0x68AA23D81A5FE6D7,
    0xF712796DDE76DBF6, 0x667C7B663C8361E4, 0x5DCC1ABDC6602722, 0xEDED61925AB71BEF,
    0xC619D517B5F15209, 0x4D027771B204B599, 0xC949FBC8E46F0F01, 0xF25618BA051FF24C,
    0x095612A6D6AC02FD, 0x965F14112292CC89, 0xB34C4136353E6C07, 0x0CA6D15BAC32827E,
    0x621CAE65F16AA5CD, 0x13054240750D1FB6, 0x122866C5FB6B840E, 0xED951E03B09B9EA5,
    0xE7A318BF2FBE5570, 0xE0CDAF035F8FA080, 0x4F8AD2DEA72DAB4C, 0x0E909FA34CA13596,
    0x6356486C6D7DE2CC, 0x0EB94B47E5ACB77D, 0x55AC7DB0E33F4747, 0x365E1AC72731D6DB,
    0xACC7821C0A3A3B91, 0x0770C2BAD2037B17, 0x4654A787C351BEC5, 0x9DCE05677789B88D,
    0x104CCF22E4605467, 0x65C5A4031CDCFA96, 0x8EFD17B1ECA9B99D, 0x7E51D12C4B6AE0BB,
    0x153F754B63C28872, 0x4536F3BF8B27AA86, 0x43A4146F61E67D1D, 0x2E4AE187403BFDA0,
    0x72C97C1438AB81A4, 0x1EF547F4DC243F07, 0xC8854ECC4E1BED36, 0x1139AB5B8A1869B4,
    0x379A133F976EDF35, 0x236CD879AE17D89E, 0xC5AAB881B405AFAC, 0x9C179DA90C0CB27C,
    0xA618C90B01D85365, 0x7139F32115B1B836, 0x541800DF1DC4BC7A, 0x1E78B3CF4365D2FA,
    0xB596746FF6E40691, 0x93BE4D4F87D2B070, 0x23CA88C5BB113987, 0xA13DA421E82A9CA1,
    0x66291971AD30BC23, 0x28A14D2B0944527E, 0x860496E671C31086, 0xFA49103D4223672F,
    0x074800F663C176DB, 0x79D37B46846D62E9, 0x1CF8B1B10A8C935B, 0xBA8DF5EDAE26279F,
    0x39662B8761B126BF, 0x40DA146851AC472C, 0x83D2CF2C7558F3AE, 0x6238AA5988B6BC8B,
    0xF23A066EA9EBDC89, 0x6F42477E0770B3B6, 0x7A11828FF93D53AE, 0xD5B717253BBCD09E,
    0x8A56DE47D4AE37F2, 0xE5E7D872DDDC3CF4, 0x1B2D452CD8010401, 0x7364B55604F52ED6,
    0xFA1B3DA2F77CFFA6, 0xA26CC63F470CAC42, 0x0FFEB7DC7E5B98CE, 0x41E663A802252A59,
    0xA4228E85AAD21204, 0x5FBE28E003892CF7, 0xCF60B9E4505FE100, 0x815C8FB9ACE04785,
    0x616B61A8ED346D4B, 0xFB6D3474A500076A, 0x3DAD91750FDB9C29, 0xDBEA98962863F5D8,
    0x14664094FAB50AA2, 0x5705824D046F976D, 0xFDABFA58C53C5F20, 0x720E806B20D5ED02,
    0x7A2FA16E78E50B62, 0x3F764C5468AAD136, 0x36DC4E9B73D9F4E7, 0xAFF771D3D1296042,
    0xA9412B2B8B51BC63, 0x8501017D4FC72851, 0xD95C024D73B7FD40, 0xF1C8264B6ED4D625,
    0x7CF21848498EAA1C, 0x9B368B5392EA0002, 0x8674502B650EB5F3, 0xDCA0C8512F4092A5,
    0xFA6641DB93855C80, 0xC00671B424A8A63A, 0x1EDE260E3D904DBD, 0x86D628967EFEDB37,
    0xA3EEA925BA590004, 0x3AF4159DD2F650FB, 0xB36EEBCF7E713438, 0x1D0DD88D2804F23E,
    0x26FC6379BCB728CD, 0x18403F020E973B92, 0xF932F969AA7A0769, 0x5B8000ABFF846AA7,
    0x19AA8819C68715FC, 0x56F2F6FEFA80B73B, 0x5259416F09A14319, 0x570B0FC66780C034,
    0x7B206E96F82865B7, 0xE4323C79C3E46760, 0x78AE9F22E8149C4F, 0x8332E61DB0FB255D,
    0x434C52A5E84A2CFB, 0xC5349DF222C6A4B8, 0x857354179831262A, 0x4B16704E69C687BF,
    0xE6088A0C6895F311, 0x24B0AB51CD8861E7, 0x629F8A7664A872E9, 0x4BCC31DCABAC1371,
    0xE74D47C1CB4E2ECA, 0x2112D4413B7808F2, 0xD833F1390ADDE9DE, 0xD36B137081699C38,
    0xEF7A062EA5BFA686, 0x81BD8609D8714967, 0x7ACAA98E5FDEDD79, 0x1AFFFBC4DBC9B130,
    0x04C2B9B030432128, 0x4CC8EE83A1B3C499, 0xD42FD71FED123CDC, 0xF7B2E7541B53602D,
    0xD6E90903C931E438, 0x53F4179672D80B9D, 0x6E7635E85E36157E, 0xAF5CF729DC11798C,
    0xA19913B8361BD385, 0x442D744CEC498549, 0x834424934FD0F8B2, 0x9BA56222356E8F69,
    0x2A7F2A45375CFDE0, 0x0611862AB18021B0, 0x53508DC6839282C8, 0xC29F1724B88D5450,
    0x9DF79C6A5E811B2A, 0xE2391D32C696713A, 0xB90352A1EDCC8FF1, 0x05CA0FE940D16CF7,
    0x6B4FF61FEA59CFC4, 0x02F8CEA6E72EA6A8, 0x7F75A0CAFB74202D, 0xAD45B4C7CB096D33,
    0xBCB028ABE2D6F293, 0x6E808CDE4C5C04E7, 0xB2191ACC259107C6, 0x976FD65DD6F4D24B,
    0xEF87A08DD9C472E1, 0xE0C4AF75F92FC427, 0x3E361E7E34067FF6, 0x99369AF92C218190,
    0xFCD29C7F992C7AC9, 0x713A1D00E7AC2B04, 0x7C66A9259BD5FD4E, 0xBC130B140FBAF0E1,
    0xDA574E440CB69EDF, 0x48E1856A8AC1DDE4, 0xD66E9EA188B3F409, 0xE702B288B11E3C6C,
    0xFEDB8A06BF4CE47D, 0x07A696B548B8E50A, 0x429A85800728DF9A, 0xBDCDEC4255A024FB,
    0x4E1204D8BEC8BFF4, 0xF2B4F33E4E65346D, 0xA30ABAF712321322, 0x158E231F2E638792,
    0x55C29D3D59FEBCA2, 0x588D75F652C90666, 0x75A9861D4890C9D4, 0x15BF1412C55A5306,
    0xF6850A98BF9ED4F3, 0xBD5F67DD938897B4, 0xAA98A34841866C54, 0x7BBC1B34023B181F,
];
